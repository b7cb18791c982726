use kernel::id::UserId;

/// One row of the customer register. The register lists system
/// users with the company they belong to joined in.
#[derive(Debug, Clone)]
pub struct CustomerAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Company name; users without a customer link have none
    pub company: Option<String>,
}

impl CustomerAccount {
    pub fn company_display(&self) -> &str {
        self.company.as_deref().unwrap_or("-")
    }
}
