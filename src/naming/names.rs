//! Dot-joined unique names for the user → project → group/experiment → job hierarchy.
//!
//! Nothing here validates its inputs: identifiers are interpolated as given.

use std::fmt::Display;

/// Replaces every `.` with `/`, turning `user.project` into `user/project`.
pub fn urlify_project_name(project_name: &str) -> String {
    project_name.replace('.', "/")
}

pub fn split_project_name(project_name: &str) -> Vec<&str> {
    project_name.split('.').collect()
}

pub fn split_group_name(group_name: &str) -> Vec<&str> {
    group_name.split('.').collect()
}

pub fn get_project_unique_name(username: &str, project_name: &str) -> String {
    format!("{}.{}", username, project_name)
}

pub fn get_group_unique_name(username: &str, project_name: &str, group_sequence: u64) -> String {
    let project_unique_name = get_project_unique_name(username, project_name);
    format!("{}.{}", project_unique_name, group_sequence)
}

pub fn get_experiment_unique_name(
    username: &str,
    project_name: &str,
    experiment_sequence: u64,
) -> String {
    let project_unique_name = get_project_unique_name(username, project_name);
    format!("{}.{}", project_unique_name, experiment_sequence)
}

pub fn get_job_unique_name(
    username: &str,
    project_name: &str,
    experiment_sequence: u64,
    job_sequence: u64,
) -> String {
    let experiment_unique_name =
        get_experiment_unique_name(username, project_name, experiment_sequence);
    format!("{}.{}", experiment_unique_name, job_sequence)
}

/// Group name relative to a project; the sequence may arrive as a number or a string.
pub fn get_group_name(project_name: &str, group_sequence: impl Display) -> String {
    format!("{}.{}", project_name, group_sequence)
}

/// Drops the group segment from `user.project.group.experiment`.
///
/// Any other shape is returned as-is, so `user.project.experiment` is already an index name.
pub fn get_experiment_index_name(unique_name: &str) -> String {
    let mut values = split_project_name(unique_name);
    if values.len() == 4 {
        values.remove(2);
    }
    values.join(".")
}

/// Drops the group segment (only for six-part names), then whatever sits at position 4.
///
/// The second removal is positional and unconditional: a five-part name loses its
/// last segment, a six-part name loses the segment that was originally at index 5.
/// Names with fewer than five remaining parts are left alone.
pub fn get_job_index_name(unique_name: &str) -> String {
    let mut values = split_project_name(unique_name);
    if values.len() == 6 {
        values.remove(2);
    }
    if values.len() > 4 {
        values.remove(4);
    }
    values.join(".")
}
