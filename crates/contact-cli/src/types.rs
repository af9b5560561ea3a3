use contact_model::RunReport;

#[derive(Debug)]
pub struct RunResult {
    pub report: RunReport,
    pub dry_run: bool,
    pub has_errors: bool,
}
