mod reset_errors;
mod reset_moves_the_current_branch;
