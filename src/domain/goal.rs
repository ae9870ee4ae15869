//! FinancialGoal domain model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;
use super::result::{Error, Result};

/// A savings target with a deadline
///
/// The goal does not track the saved balance; callers supply the current
/// amount and the goal derives progress, remaining amount and reached
/// status from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialGoal {
    id: Uuid,
    user_id: Uuid,
    name: String,
    target_amount: Money,
    deadline: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FinancialGoal {
    /// Create a new goal with a freshly generated id
    ///
    /// The deadline must not be in the past.
    pub fn create(
        user_id: Uuid,
        name: &str,
        target_amount: Money,
        deadline: NaiveDate,
    ) -> Result<Self> {
        validate_name(name)?;
        validate_deadline(deadline)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.trim().to_string(),
            target_amount,
            deadline,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_amount(&self) -> &Money {
        &self.target_amount
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Progress towards the target as a percentage, rounded to 2 decimal
    /// places half-up (computed at 4 internal decimal digits). Can exceed
    /// 100 when the goal is overshot; exactly zero for a zero current
    /// amount or a zero target rather than dividing.
    pub fn calculate_progress(&self, current_amount: &Money) -> Result<Decimal> {
        self.validate_current_amount(current_amount)?;

        if current_amount.amount() == Decimal::ZERO
            || self.target_amount.amount() == Decimal::ZERO
        {
            return Ok(Decimal::ZERO);
        }

        let ratio = (current_amount.amount() / self.target_amount.amount())
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
        Ok((ratio * Decimal::from(100))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Amount still missing, floored at zero once the target is met
    pub fn calculate_remaining(&self, current_amount: &Money) -> Result<Money> {
        self.validate_current_amount(current_amount)?;

        let remaining = self.target_amount.amount() - current_amount.amount();
        if remaining <= Decimal::ZERO {
            return Ok(Money::zero(self.target_amount.currency().clone()));
        }
        Money::new(remaining, self.target_amount.currency().clone())
    }

    /// Whether the saved amount meets or exceeds the target
    pub fn is_reached(&self, current_amount: &Money) -> Result<bool> {
        self.validate_current_amount(current_amount)?;
        Ok(current_amount.amount() >= self.target_amount.amount())
    }

    /// Whether today is strictly past the deadline; the deadline day itself
    /// has not passed
    pub fn is_deadline_passed(&self) -> bool {
        Utc::now().date_naive() > self.deadline
    }

    /// Rename the goal, re-validating the name
    pub fn update_name(&mut self, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        self.name = new_name.trim().to_string();
        self.touch();
        Ok(())
    }

    /// Replace the target amount
    pub fn update_target_amount(&mut self, new_target: Money) {
        self.target_amount = new_target;
        self.touch();
    }

    /// Move the deadline; the new date must not be in the past
    pub fn update_deadline(&mut self, new_deadline: NaiveDate) -> Result<()> {
        validate_deadline(new_deadline)?;
        self.deadline = new_deadline;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn validate_current_amount(&self, current_amount: &Money) -> Result<()> {
        if current_amount.currency() != self.target_amount.currency() {
            return Err(Error::currency_mismatch(
                "Current amount must have the same currency as target amount",
            ));
        }
        Ok(())
    }
}

impl PartialEq for FinancialGoal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FinancialGoal {}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation("Name cannot be empty"));
    }
    Ok(())
}

fn validate_deadline(deadline: NaiveDate) -> Result<()> {
    if deadline < Utc::now().date_naive() {
        return Err(Error::validation("Deadline cannot be in the past"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Currency;
    use chrono::Duration;

    fn usd(cents: i64) -> Money {
        Money::new(Decimal::new(cents, 2), Currency::new("USD").unwrap()).unwrap()
    }

    fn eur(cents: i64) -> Money {
        Money::new(Decimal::new(cents, 2), Currency::new("EUR").unwrap()).unwrap()
    }

    fn future_deadline() -> NaiveDate {
        Utc::now().date_naive() + Duration::days(90)
    }

    fn goal(target_cents: i64) -> FinancialGoal {
        FinancialGoal::create(Uuid::new_v4(), "Vacation", usd(target_cents), future_deadline())
            .unwrap()
    }

    #[test]
    fn test_create_validations() {
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        assert!(FinancialGoal::create(Uuid::new_v4(), " ", usd(100), future_deadline()).is_err());
        assert!(FinancialGoal::create(Uuid::new_v4(), "Trip", usd(100), yesterday).is_err());
        // Today is an acceptable deadline
        let today = Utc::now().date_naive();
        assert!(FinancialGoal::create(Uuid::new_v4(), "Trip", usd(100), today).is_ok());
    }

    #[test]
    fn test_progress_percentage() {
        let goal = goal(100000); // 1000.00
        assert_eq!(
            goal.calculate_progress(&usd(25000)).unwrap(),
            Decimal::new(2500, 2)
        );
        assert_eq!(goal.calculate_progress(&usd(0)).unwrap(), Decimal::ZERO);
        // Overshooting reports more than 100%
        assert_eq!(
            goal.calculate_progress(&usd(150000)).unwrap(),
            Decimal::new(15000, 2)
        );
    }

    #[test]
    fn test_progress_rounds_at_internal_precision() {
        // 1/3 of 300.00: ratio 0.3333 -> 33.33%
        let goal = goal(30000);
        assert_eq!(
            goal.calculate_progress(&usd(10000)).unwrap(),
            Decimal::new(3333, 2)
        );
        assert_eq!(
            goal.calculate_progress(&usd(20000)).unwrap(),
            Decimal::new(6667, 2)
        );
    }

    #[test]
    fn test_zero_target_progress_is_zero() {
        // A zero target is constructible; progress must not divide by it
        let goal = FinancialGoal::create(
            Uuid::new_v4(),
            "Someday",
            Money::zero(Currency::new("USD").unwrap()),
            future_deadline(),
        )
        .unwrap();

        assert_eq!(goal.calculate_progress(&usd(10000)).unwrap(), Decimal::ZERO);
        assert_eq!(goal.calculate_progress(&usd(0)).unwrap(), Decimal::ZERO);
        // A zero target counts as already met
        assert!(goal.is_reached(&usd(0)).unwrap());
    }

    #[test]
    fn test_remaining_floors_at_zero() {
        let goal = goal(100000);
        assert_eq!(goal.calculate_remaining(&usd(40000)).unwrap(), usd(60000));
        // target=1000, current=1500 -> 0, never negative
        assert_eq!(
            goal.calculate_remaining(&usd(150000)).unwrap(),
            Money::zero(Currency::new("USD").unwrap())
        );
        assert_eq!(
            goal.calculate_remaining(&usd(100000)).unwrap(),
            Money::zero(Currency::new("USD").unwrap())
        );
    }

    #[test]
    fn test_is_reached_is_inclusive() {
        let goal = goal(100000);
        assert!(goal.is_reached(&usd(100000)).unwrap());
        assert!(goal.is_reached(&usd(100001)).unwrap());
        assert!(!goal.is_reached(&usd(99999)).unwrap());
    }

    #[test]
    fn test_currency_mismatch() {
        let goal = goal(100000);
        assert!(matches!(
            goal.calculate_progress(&eur(100)),
            Err(Error::CurrencyMismatch(_))
        ));
        assert!(matches!(
            goal.calculate_remaining(&eur(100)),
            Err(Error::CurrencyMismatch(_))
        ));
        assert!(matches!(
            goal.is_reached(&eur(100)),
            Err(Error::CurrencyMismatch(_))
        ));
    }

    #[test]
    fn test_deadline_passed_is_strict() {
        // Deadline today: not yet passed
        let today = Utc::now().date_naive();
        let due_today =
            FinancialGoal::create(Uuid::new_v4(), "Due", usd(100), today).unwrap();
        assert!(!due_today.is_deadline_passed());

        let far_out = goal(100);
        assert!(!far_out.is_deadline_passed());
    }

    #[test]
    fn test_update_deadline_rejects_past() {
        let mut goal = goal(100000);
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        assert!(goal.update_deadline(yesterday).is_err());
        goal.update_deadline(future_deadline() + Duration::days(10))
            .unwrap();
    }

    #[test]
    fn test_updates_touch_updated_at() {
        let mut goal = goal(100000);
        let before = goal.updated_at();
        goal.update_name("House").unwrap();
        assert!(goal.updated_at() >= before);
        assert_eq!(goal.name(), "House");

        goal.update_target_amount(usd(200000));
        assert_eq!(goal.target_amount(), &usd(200000));
    }
}
