mod planner;

#[cfg(test)]
mod tests;

pub use planner::{ChunkPlan, ChunkPlanEntry, plan, plan_chunks};

/// 1-based chunk sequence number
pub type ChunkNumber = usize;
