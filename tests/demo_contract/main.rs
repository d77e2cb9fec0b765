//! Demo Contract Test Suite
//!
//! Verifies the observable behavior of the scoreboard demonstration.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Single-run contract against the in-memory store
//! - **Tier 2**: Re-run and shared-store behavior
//! - **Tier 3**: Failure propagation
//! - **Tier 4**: Live server (ignored by default, needs a local Redis)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test demo_contract
//! cargo test --test demo_contract -- --ignored   # with redis-server running
//! ```

mod test_utils;

mod tier1_single_run;
mod tier2_rerun;
mod tier3_failures;
mod tier4_live_redis;
