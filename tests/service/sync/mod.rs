mod run_pass;
