pub mod fixture_store;
