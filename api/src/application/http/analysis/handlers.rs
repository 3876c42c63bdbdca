pub mod analyze_location;
