mod merge_deletion_propagates;
mod merge_fast_forward;
