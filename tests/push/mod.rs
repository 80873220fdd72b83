mod rejected_push_is_logged;
mod stop_when_add_fails;
mod stop_when_commit_fails;
