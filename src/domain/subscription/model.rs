//! Subscription domain entities

use chrono::{DateTime, Duration, Utc};

use crate::domain::plan::BILLING_CYCLE_DAYS;

/// A user's subscription to a plan for one billing cycle
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: i32,
    pub plan_id: i32,
    pub user_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Subscription {
    /// Whole days left in the cycle at `now`, clamped to `0..=BILLING_CYCLE_DAYS`.
    pub fn remaining_days(&self, now: DateTime<Utc>) -> i32 {
        let days = (self.end_date - now).num_days();
        days.clamp(0, i64::from(BILLING_CYCLE_DAYS)) as i32
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub plan_id: i32,
    pub user_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl NewSubscription {
    /// One full cycle starting at `start`
    pub fn one_cycle(plan_id: i32, user_id: i32, start: DateTime<Utc>) -> Self {
        Self {
            plan_id,
            user_id,
            start_date: start,
            end_date: start + Duration::days(i64::from(BILLING_CYCLE_DAYS)),
        }
    }
}

/// Payment recorded against a subscription
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i32,
    pub subscription_id: i32,
    pub activation_id: i32,
    /// Smallest currency unit
    pub amount_paid: i32,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SubscriptionActivation {
    pub id: i32,
    pub subscription_id: i32,
    pub activation_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn subscription_starting(start: DateTime<Utc>) -> Subscription {
        let new = NewSubscription::one_cycle(1, 1, start);
        Subscription {
            id: 1,
            plan_id: new.plan_id,
            user_id: new.user_id,
            start_date: new.start_date,
            end_date: new.end_date,
        }
    }

    #[test]
    fn one_cycle_spans_thirty_days() {
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let new = NewSubscription::one_cycle(3, 7, start);
        assert_eq!(new.end_date, Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn remaining_days_counts_whole_days() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let sub = subscription_starting(start);

        assert_eq!(sub.remaining_days(start), 30);
        assert_eq!(sub.remaining_days(start + Duration::days(20)), 10);
        assert_eq!(sub.remaining_days(start + Duration::hours(20 * 24 + 5)), 9);
    }

    #[test]
    fn remaining_days_is_clamped() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let sub = subscription_starting(start);

        assert_eq!(sub.remaining_days(start + Duration::days(45)), 0);
        assert_eq!(sub.remaining_days(start - Duration::days(10)), 30);
    }
}
