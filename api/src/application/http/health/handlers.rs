pub mod get_health;
