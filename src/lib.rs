//! Egyptian payroll and annual tax settlement engine
//!
//! This crate computes statutory monthly payslips (social insurance, stamp duty,
//! progressive income tax, loan and settlement installments) and reconciles the
//! tax withheld over a fiscal year against the tax legally owed, opening an
//! installment plan when the employee underpaid.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
