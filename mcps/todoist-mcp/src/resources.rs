//! Resource URIs and their documents
//!
//! Resources are read-only markdown views over the list operations:
//!
//! | URI | Contents |
//! |-----|----------|
//! | `todoist://tasks` | all active tasks |
//! | `todoist://tasks/project/{project_id}` | tasks in a project |
//! | `todoist://tasks/section/{section_id}` | tasks in a section |
//! | `todoist://tasks/label/{label}` | tasks carrying a label |
//! | `todoist://projects` | all projects |
//! | `todoist://sections/{project_id}` | sections of a project |
//! | `todoist://labels` | all personal labels |

use percent_encoding::percent_decode_str;

use crate::adapter::TodoistAdapter;
use crate::markdown::{self, Document};
use crate::params::{GetSectionsParams, GetTasksParams};

pub const SCHEME: &str = "todoist://";

/// A static resource or URI template advertised to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Resources with a fixed URI
pub const RESOURCES: &[ResourceDescriptor] = &[
    ResourceDescriptor {
        uri: "todoist://tasks",
        name: "tasks",
        description: "All active Todoist tasks",
    },
    ResourceDescriptor {
        uri: "todoist://projects",
        name: "projects",
        description: "All Todoist projects",
    },
    ResourceDescriptor {
        uri: "todoist://labels",
        name: "labels",
        description: "All personal Todoist labels",
    },
];

/// Parameterized resources
pub const TEMPLATES: &[ResourceDescriptor] = &[
    ResourceDescriptor {
        uri: "todoist://tasks/project/{project_id}",
        name: "project_tasks",
        description: "Active tasks in a project",
    },
    ResourceDescriptor {
        uri: "todoist://tasks/section/{section_id}",
        name: "section_tasks",
        description: "Active tasks in a section",
    },
    ResourceDescriptor {
        uri: "todoist://tasks/label/{label}",
        name: "label_tasks",
        description: "Active tasks carrying a label",
    },
    ResourceDescriptor {
        uri: "todoist://sections/{project_id}",
        name: "project_sections",
        description: "Sections of a project",
    },
];

/// A parsed resource URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Tasks(GetTasksFilter),
    Projects,
    Sections { project_id: String },
    Labels,
}

/// The single filter a task resource may carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetTasksFilter {
    All,
    Project(String),
    Section(String),
    Label(String),
}

impl ResourceUri {
    /// Parse a `todoist://` URI, returning `None` for anything unknown
    pub fn parse(uri: &str) -> Option<Self> {
        let rest = uri.strip_prefix(SCHEME)?.trim_end_matches('/');
        let segments: Vec<&str> = rest.split('/').collect();

        // Clients expand templates with percent-encoding; invalid UTF-8 is unknown
        let owned = |s: &str| {
            let decoded = percent_decode_str(s).decode_utf8().ok()?;
            (!decoded.is_empty()).then(|| decoded.into_owned())
        };
        match segments.as_slice() {
            ["tasks"] => Some(Self::Tasks(GetTasksFilter::All)),
            ["tasks", "project", id] => owned(id).map(|id| Self::Tasks(GetTasksFilter::Project(id))),
            ["tasks", "section", id] => owned(id).map(|id| Self::Tasks(GetTasksFilter::Section(id))),
            ["tasks", "label", label] => {
                owned(label).map(|label| Self::Tasks(GetTasksFilter::Label(label)))
            }
            ["projects"] => Some(Self::Projects),
            ["sections", id] => owned(id).map(|project_id| Self::Sections { project_id }),
            ["labels"] => Some(Self::Labels),
            _ => None,
        }
    }

    /// Fetch the backing list and render it
    pub async fn read(&self, adapter: &TodoistAdapter) -> Document {
        match self {
            Self::Tasks(filter) => {
                let mut params = GetTasksParams::default();
                match filter {
                    GetTasksFilter::All => {}
                    GetTasksFilter::Project(id) => params.project_id = Some(id.clone()),
                    GetTasksFilter::Section(id) => params.section_id = Some(id.clone()),
                    GetTasksFilter::Label(label) => params.label = Some(label.clone()),
                }
                markdown::tasks_document(adapter.get_tasks(params).await)
            }
            Self::Projects => markdown::projects_document(adapter.get_projects().await),
            Self::Sections { project_id } => {
                let params = GetSectionsParams {
                    project_id: Some(project_id.clone()),
                };
                markdown::sections_document(project_id, adapter.get_sections(params).await)
            }
            Self::Labels => markdown::labels_document(adapter.get_labels().await),
        }
    }
}
