mod remove_branch_errors;
