//! Journal of workflow runs.
//!
//! Every workflow the host executes leaves one `WorkflowExecution` behind with its
//! name and a JSON copy of its input, the way a workflow engine keeps an execution log.
//! Tests read it to assert which workflows ran and with what.

use super::error::{check_non_empty, ValidationError};
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordId};
use serde::Serialize;
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowExecution {
    pub id: RecordId,
    pub workflow: String,
    pub input: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowExecutionCreate {
    pub workflow: String,
    pub input: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct WorkflowExecutionFilter {
    pub workflow: Option<String>,
}

impl WorkflowExecutionFilter {
    pub fn by_workflow(workflow: impl Into<String>) -> Self {
        Self {
            workflow: Some(workflow.into()),
        }
    }
}

#[async_trait]
impl HostRecord for WorkflowExecution {
    const PREFIX: &'static str = "wfex";
    type Create = WorkflowExecutionCreate;
    type Update = Infallible;
    type Filter = WorkflowExecutionFilter;
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: WorkflowExecutionCreate) -> Result<Self, Self::Error> {
        check_non_empty("workflow name", &params.workflow)?;
        Ok(Self {
            id,
            workflow: params.workflow,
            input: params.input,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, filter: &WorkflowExecutionFilter) -> bool {
        filter.workflow.as_ref().map_or(true, |w| &self.workflow == w)
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}
