pub mod names;
pub mod urls;

pub use names::{
    get_experiment_index_name, get_experiment_unique_name, get_group_name,
    get_group_unique_name, get_job_index_name, get_job_unique_name, get_project_unique_name,
    split_group_name, split_project_name, urlify_project_name,
};
pub use urls::{
    get_experiment_url, get_group_url, get_job_url, get_notebook_url, get_project_url,
    get_tensorboard_url, get_user_url,
};
