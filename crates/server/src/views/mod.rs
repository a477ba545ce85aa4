//! Role dashboards.
//!
//! Each role has its own view function; [`render`] picks one from a
//! [`ViewMode`]. Views are pure over the loaded tables.

mod admin;
mod judge;
mod lawyer;
pub mod present;

pub use admin::admin_dashboard;
pub use judge::judge_dashboard;
pub use lawyer::lawyer_dashboard;

use shared_types::{AppError, DashboardResponse, DashboardSettings, Role};

use crate::dataset::DataContext;
use crate::filter::{distinct_judges, distinct_lawyers};

/// A role together with the entity it is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Judge(String),
    Lawyer(String),
    Administrator,
}

impl ViewMode {
    /// Resolve a role and optional entity name against the loaded tables.
    ///
    /// An omitted name selects the first entry of that role's picker. Names
    /// that do not occur in the data are kept as-is and produce an empty
    /// dashboard.
    pub fn resolve(ctx: &DataContext, role: Role, name: Option<&str>) -> Result<Self, AppError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        match role {
            Role::Judge => {
                let judge = match name {
                    Some(name) => name.to_string(),
                    None => distinct_judges(ctx.cases())
                        .into_iter()
                        .next()
                        .ok_or_else(|| AppError::not_found("No judges found in the case data"))?,
                };
                Ok(ViewMode::Judge(judge))
            }
            Role::Lawyer => {
                let lawyer = match name {
                    Some(name) => name.to_string(),
                    None => distinct_lawyers(ctx.hearings())
                        .into_iter()
                        .next()
                        .ok_or_else(|| AppError::not_found("No lawyers found in the hearing data"))?,
                };
                Ok(ViewMode::Lawyer(lawyer))
            }
            Role::Administrator => Ok(ViewMode::Administrator),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            ViewMode::Judge(_) => Role::Judge,
            ViewMode::Lawyer(_) => Role::Lawyer,
            ViewMode::Administrator => Role::Administrator,
        }
    }
}

pub fn render(ctx: &DataContext, mode: &ViewMode, settings: &DashboardSettings) -> DashboardResponse {
    match mode {
        ViewMode::Judge(judge) => {
            DashboardResponse::Judge(judge_dashboard(ctx.cases(), judge, settings))
        }
        ViewMode::Lawyer(lawyer) => {
            DashboardResponse::Lawyer(lawyer_dashboard(ctx.hearings(), lawyer, settings))
        }
        ViewMode::Administrator => DashboardResponse::Administrator(admin_dashboard(
            ctx.cases(),
            ctx.hearings(),
            settings,
        )),
    }
}
