pub mod policy_engine;
