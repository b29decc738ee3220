//! Dashboard paths, all rooted at `/app/{user}/{project}` except the tool pages.

pub fn get_user_url(username: &str) -> String {
    format!("/app/{}", username)
}

pub fn get_project_url(username: &str, project_name: &str) -> String {
    format!("/app/{}/{}", username, project_name)
}

pub fn get_tensorboard_url(username: &str, project_name: &str) -> String {
    format!("/tensorboard/{}/{}/", username, project_name)
}

pub fn get_notebook_url(username: &str, project_name: &str) -> String {
    format!("/notebook/{}/{}/", username, project_name)
}

pub fn get_group_url(username: &str, project_name: &str, group_sequence: u64) -> String {
    let project_url = get_project_url(username, project_name);
    format!("{}/groups/{}/", project_url, group_sequence)
}

pub fn get_experiment_url(username: &str, project_name: &str, experiment_sequence: u64) -> String {
    let project_url = get_project_url(username, project_name);
    format!("{}/experiments/{}/", project_url, experiment_sequence)
}

/// The experiment URL keeps its trailing slash, so job links contain `//jobs/`.
pub fn get_job_url(
    username: &str,
    project_name: &str,
    experiment_sequence: u64,
    job_sequence: u64,
) -> String {
    let experiment_url = get_experiment_url(username, project_name, experiment_sequence);
    format!("{}/jobs/{}/", experiment_url, job_sequence)
}
