pub mod a001_building;
pub mod a002_apartment;
pub mod a003_person;
pub mod a004_account;
pub mod a005_invoice;
pub mod a006_contract;
pub mod a007_employee;
pub mod a008_tool;
pub mod a009_payment;
pub mod a010_arrangement;
pub mod a011_poll;
pub mod a012_vote;
pub mod a013_publication;
pub mod a014_service;
pub mod a015_snapshot;
pub mod common;
