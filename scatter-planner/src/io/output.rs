use serde::{Deserialize, Serialize};

use hero_scatter::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::PlannerConfig;

/// Everything written to the solution file: the instance, its solution and the config that produced it
#[derive(Serialize, Deserialize, Clone)]
pub struct ScatterOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: PlannerConfig,
}
