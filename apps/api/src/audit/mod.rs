// Profile Audit Engine
// Pure scoring (completeness, content, SEO, social) over a ProfileSnapshot,
// plus the gathering and persistence seams the HTTP layer drives it through.

pub mod completeness;
pub mod engagement;
pub mod field_table;
pub mod gathering;
pub mod handlers;
pub mod report;
pub mod seo;
pub mod snapshot;
pub mod social;
pub mod store;
pub mod tier;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use report::{assemble, AuditReport};
pub use snapshot::ProfileSnapshot;
pub use tier::{StandardTierPolicy, TierPolicy};

/// Stateless audit runner bound to a tier policy. Cheap to clone and safe to
/// share across requests.
#[derive(Clone)]
pub struct AuditEngine {
    policy: Arc<dyn TierPolicy>,
}

impl AuditEngine {
    pub fn new(policy: Arc<dyn TierPolicy>) -> Self {
        Self { policy }
    }

    pub fn assemble(&self, snapshot: &ProfileSnapshot) -> AuditReport {
        assemble(snapshot, self.policy.as_ref())
    }
}
