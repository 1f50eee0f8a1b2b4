/// A package as listed on a user's profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,

    /// Latest published version, e.g. `1.2.3`
    pub version: String,

    /// Rough publish time as shown by the website, e.g. `a month ago`
    pub published: String,

    /// Address of the package's page on the registry website
    pub url: String,
}
