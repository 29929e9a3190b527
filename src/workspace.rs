//! The set of open projects, each with its own editor and undo history.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::StudioConfig;
use crate::document::{Document, ProjectKind};
use crate::error::{StudioError, StudioResult};
use crate::id::ProjectId;
use crate::state::EditorContext;

/// What the project tabs show about a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub id: ProjectId,
    pub name: String,
    pub kind: ProjectKind,
}

#[derive(Debug)]
pub struct OpenProject {
    pub meta: ProjectMeta,
    pub editor: EditorContext,
}

#[derive(Debug, Default)]
pub struct Workspace {
    config: StudioConfig,
    projects: Vec<OpenProject>,
    active: Option<ProjectId>,
}

impl Workspace {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            config,
            projects: Vec::new(),
            active: None,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Opens a new project and makes it active.
    ///
    /// Fails if the name is blank or already used by another open project.
    pub fn create_project(
        &mut self,
        name: &str,
        kind: Option<ProjectKind>,
    ) -> StudioResult<ProjectId> {
        let name = self.validate_name(name, None)?;
        let kind = kind.unwrap_or(self.config.default_kind);
        let meta = ProjectMeta {
            id: ProjectId::new(),
            name,
            kind,
        };
        let editor = EditorContext::from_config(Document::new(kind), &self.config);
        info!("Created {} project \"{}\" ({})", kind, meta.name, meta.id);

        let id = meta.id;
        self.projects.push(OpenProject { meta, editor });
        self.active = Some(id);
        Ok(id)
    }

    /// Renames an open project. Renaming a project to its own name is allowed.
    pub fn rename_project(&mut self, id: ProjectId, name: &str) -> StudioResult<()> {
        if self.project(id).is_none() {
            return Err(StudioError::UnknownProject(id));
        }
        let name = self.validate_name(name, Some(id))?;
        let project = self
            .project_mut(id)
            .ok_or(StudioError::UnknownProject(id))?;
        info!("Renamed project \"{}\" to \"{}\"", project.meta.name, name);
        project.meta.name = name;
        Ok(())
    }

    /// Closes a project, dropping its document and history.
    ///
    /// If it was active, the project opened before it (or else after it)
    /// becomes active.
    pub fn close_project(&mut self, id: ProjectId) -> StudioResult<OpenProject> {
        let index = self
            .projects
            .iter()
            .position(|project| project.meta.id == id)
            .ok_or(StudioError::UnknownProject(id))?;
        let closed = self.projects.remove(index);
        info!("Closed project \"{}\" ({})", closed.meta.name, id);

        if self.active == Some(id) {
            self.active = self
                .projects
                .get(index.saturating_sub(1))
                .map(|project| project.meta.id);
        }
        Ok(closed)
    }

    pub fn project(&self, id: ProjectId) -> Option<&OpenProject> {
        self.projects.iter().find(|project| project.meta.id == id)
    }

    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut OpenProject> {
        self.projects.iter_mut().find(|project| project.meta.id == id)
    }

    pub fn projects(&self) -> impl Iterator<Item = &ProjectMeta> {
        self.projects.iter().map(|project| &project.meta)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn active(&self) -> Option<&OpenProject> {
        self.project(self.active?)
    }

    pub fn active_mut(&mut self) -> Option<&mut OpenProject> {
        let id = self.active?;
        self.project_mut(id)
    }

    pub fn set_active(&mut self, id: ProjectId) -> StudioResult<()> {
        if self.project(id).is_none() {
            return Err(StudioError::UnknownProject(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Trims `name` and checks it against every open project except `except`
    fn validate_name(&self, name: &str, except: Option<ProjectId>) -> StudioResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StudioError::EmptyName);
        }
        let key = name.to_lowercase();
        let taken = self
            .projects
            .iter()
            .filter(|project| Some(project.meta.id) != except)
            .any(|project| project.meta.name.trim().to_lowercase() == key);
        if taken {
            debug!("Project name \"{}\" is already in use", name);
            return Err(StudioError::NameCollision);
        }
        Ok(name.to_string())
    }
}
