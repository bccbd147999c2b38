//! Analytics module - learner performance trends.

mod performance;

pub use performance::{
    accuracy_trend, response_time_trend, AccuracyPoint, PerformanceReport, ResponseTimePoint,
    TREND_WINDOW,
};
