pub mod diagnostic;
pub mod level_detail;
pub mod levels;
pub mod practice;
pub mod repertoire;
pub mod technique;
pub mod welcome;
