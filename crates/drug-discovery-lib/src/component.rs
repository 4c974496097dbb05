//! Boilerplate Vue 3 single-file components for the platform front end.
//!
//! Output is plain text meant to be pasted into the web app; nothing here
//! parses or checks Vue.

use std::fmt;

/// Component template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    DataTable,
    MoleculeViewer,
    TaskMonitor,
    Basic,
}

impl ComponentKind {
    /// Lenient parse: unrecognized names give [`ComponentKind::Basic`].
    pub fn parse(name: &str) -> Self {
        match name {
            "data_table" => ComponentKind::DataTable,
            "molecule_viewer" => ComponentKind::MoleculeViewer,
            "task_monitor" => ComponentKind::TaskMonitor,
            _ => ComponentKind::Basic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::DataTable => "data_table",
            ComponentKind::MoleculeViewer => "molecule_viewer",
            ComponentKind::TaskMonitor => "task_monitor",
            ComponentKind::Basic => "basic",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a component. The root element's CSS class is `name` lowercased.
pub fn generate_component(name: &str, kind: ComponentKind, features: &[String]) -> String {
    let class = name.to_lowercase();
    let features = features_comment(features);
    match kind {
        ComponentKind::DataTable => data_table(&class, &features),
        ComponentKind::MoleculeViewer => molecule_viewer(&class, &features),
        ComponentKind::TaskMonitor => task_monitor(&class, &features),
        ComponentKind::Basic => basic(name, &class, &features),
    }
}

/// Tool-response wrapper around [`generate_component`].
pub fn component_message(name: &str, kind: ComponentKind, features: &[String]) -> String {
    format!(
        "Generated Vue component:\n```vue\n{}\n```",
        generate_component(name, kind, features)
    )
}

fn features_comment(features: &[String]) -> String {
    let listed: Vec<&str> = features
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if listed.is_empty() {
        String::new()
    } else {
        format!("// Features: {}\n", listed.join(", "))
    }
}

fn data_table(class: &str, features: &str) -> String {
    format!(
        r#"<template>
  <div class="{class}">
    <el-table :data="tableData" style="width: 100%">
      <el-table-column prop="id" label="ID" width="80" />
      <el-table-column prop="name" label="Name" />
      <el-table-column prop="status" label="Status" />
      <el-table-column prop="created_at" label="Created" />
      <el-table-column label="Actions">
        <template #default="scope">
          <el-button size="small" @click="handleView(scope.row)">View</el-button>
          <el-button size="small" type="danger" @click="handleDelete(scope.row)">Delete</el-button>
        </template>
      </el-table-column>
    </el-table>
  </div>
</template>

<script setup lang="ts">
{features}import {{ ref, onMounted }} from 'vue'

interface TableItem {{
  id: string
  name: string
  status: string
  created_at: string
}}

const tableData = ref<TableItem[]>([])

onMounted(() => {{
  loadData()
}})

const loadData = async () => {{
  // fetch rows
}}

const handleView = (row: TableItem) => {{
  console.log('view:', row)
}}

const handleDelete = (row: TableItem) => {{
  console.log('delete:', row)
}}
</script>

<style scoped>
.{class} {{
  padding: 20px;
}}
</style>"#
    )
}

fn molecule_viewer(class: &str, features: &str) -> String {
    format!(
        r#"<template>
  <div class="{class}">
    <div class="viewer-container">
      <div id="molecule-viewer"></div>
    </div>
    <div class="properties-panel">
      <h3>Molecule properties</h3>
      <el-descriptions :column="1" border>
        <el-descriptions-item label="SMILES">{{{{ moleculeData.smiles }}}}</el-descriptions-item>
        <el-descriptions-item label="Molecular weight">{{{{ moleculeData.molecular_weight }}}}</el-descriptions-item>
        <el-descriptions-item label="LogP">{{{{ moleculeData.logp }}}}</el-descriptions-item>
      </el-descriptions>
    </div>
  </div>
</template>

<script setup lang="ts">
{features}import {{ ref, onMounted }} from 'vue'

interface MoleculeData {{
  smiles: string
  molecular_weight: number
  logp: number
}}

const moleculeData = ref<MoleculeData>({{
  smiles: '',
  molecular_weight: 0,
  logp: 0
}})

onMounted(() => {{
  initViewer()
}})

const initViewer = () => {{
  // set up the 3D viewer
}}

const loadMolecule = (smiles: string) => {{
  moleculeData.value.smiles = smiles
}}
</script>

<style scoped>
.{class} {{
  display: flex;
  height: 400px;
}}

.viewer-container {{
  flex: 1;
  border: 1px solid #ddd;
}}

.properties-panel {{
  width: 300px;
  padding: 20px;
  border-left: 1px solid #ddd;
}}
</style>"#
    )
}

fn task_monitor(class: &str, features: &str) -> String {
    format!(
        r#"<template>
  <div class="{class}">
    <el-card>
      <template #header>
        <div class="card-header">
          <span>Task monitor</span>
          <el-button type="primary" @click="refresh">Refresh</el-button>
        </div>
      </template>

      <el-tabs v-model="activeTab">
        <el-tab-pane label="Running" name="running">
          <task-list :tasks="runningTasks" />
        </el-tab-pane>
        <el-tab-pane label="Completed" name="completed">
          <task-list :tasks="completedTasks" />
        </el-tab-pane>
        <el-tab-pane label="Failed" name="failed">
          <task-list :tasks="failedTasks" />
        </el-tab-pane>
      </el-tabs>
    </el-card>
  </div>
</template>

<script setup lang="ts">
{features}import {{ ref, onMounted }} from 'vue'
import TaskList from './TaskList.vue'

interface Task {{
  id: string
  name: string
  status: string
  progress: number
  created_at: string
}}

const activeTab = ref('running')
const runningTasks = ref<Task[]>([])
const completedTasks = ref<Task[]>([])
const failedTasks = ref<Task[]>([])

onMounted(() => {{
  loadTasks()
}})

const loadTasks = async () => {{
  // fetch tasks
}}

const refresh = () => {{
  loadTasks()
}}
</script>

<style scoped>
.card-header {{
  display: flex;
  justify-content: space-between;
  align-items: center;
}}
</style>"#
    )
}

fn basic(name: &str, class: &str, features: &str) -> String {
    format!(
        r#"<template>
  <div class="{class}">
    <h2>{name} component</h2>
    <p>A basic Vue 3 component template</p>
  </div>
</template>

<script setup lang="ts">
{features}</script>

<style scoped>
.{class} {{
  padding: 20px;
}}
</style>"#
    )
}
