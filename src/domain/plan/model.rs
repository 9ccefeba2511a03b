//! Plan domain entity

/// A named subscription tier with a fixed price per billing cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: i32,
    /// Unique plan name
    pub name: String,
    /// Price for one full cycle (in smallest currency unit)
    pub price: i32,
}

/// Data needed to insert a plan
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub name: String,
    pub price: i32,
}
