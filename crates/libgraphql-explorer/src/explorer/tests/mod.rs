mod explorer_tests;
mod undo_cache_tests;
