pub mod trace_stats;
