mod activity_list_steps;
mod block_steps;
