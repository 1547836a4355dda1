//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the claims test suites. Fixtures are
//! deterministic where the domain allows it so assertions stay predictable.

use chrono::{DateTime, Duration, Months, Utc};
use core_kernel::{CustomerId, PolicyNumber};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// The standard known customer
    pub fn customer_id() -> CustomerId {
        CustomerId::new("CUST001").expect("valid fixture customer id")
    }

    /// A second customer for ownership-mismatch tests
    pub fn other_customer_id() -> CustomerId {
        CustomerId::new("CUST002").expect("valid fixture customer id")
    }

    /// A customer id that no fixture gateway knows about
    pub fn unknown_customer_id() -> CustomerId {
        CustomerId::new("CUST404").expect("valid fixture customer id")
    }

    /// The standard active policy
    pub fn policy_number() -> PolicyNumber {
        PolicyNumber::new("POL001").expect("valid fixture policy number")
    }

    /// A second policy for non-duplicate tests
    pub fn other_policy_number() -> PolicyNumber {
        PolicyNumber::new("POL002").expect("valid fixture policy number")
    }
}

/// Fixture for claim amount test data
pub struct AmountFixtures;

impl AmountFixtures {
    /// A routine claim amount
    pub fn standard() -> Decimal {
        dec!(5000.00)
    }

    /// Exactly the business-rule ceiling; accepted
    pub fn at_limit() -> Decimal {
        dec!(100_000)
    }

    /// One cent over the ceiling; rejected
    pub fn over_limit() -> Decimal {
        dec!(100_000.01)
    }

    /// Well over the ceiling, used by the named rejection scenario
    pub fn excessive() -> Decimal {
        dec!(150_000.00)
    }
}

/// Fixture for incident timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// An incident from yesterday, comfortably inside the claim window
    pub fn yesterday() -> DateTime<Utc> {
        Utc::now() - Duration::days(1)
    }

    /// An incident from last week
    pub fn last_week() -> DateTime<Utc> {
        Utc::now() - Duration::days(7)
    }

    /// One second into the future; rejected by the business rules
    pub fn just_future() -> DateTime<Utc> {
        Utc::now() + Duration::seconds(1)
    }

    /// One second inside the one-year window; accepted
    pub fn almost_one_year_ago() -> DateTime<Utc> {
        Utc::now() - Months::new(12) + Duration::seconds(1)
    }

    /// One second outside the one-year window; rejected
    pub fn over_one_year_ago() -> DateTime<Utc> {
        Utc::now() - Months::new(12) - Duration::seconds(1)
    }
}
