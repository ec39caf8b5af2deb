//! Monthly financial projection of a small remote call center.
//!
//! [`services::projection::project`] turns staffing and conversion rates into
//! a monthly table and a summary; [`services::labor_cost::compute_labor_cost`]
//! derives the employer cost that usually feeds the projection as its
//! operating cost.

pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
mod test_support;
