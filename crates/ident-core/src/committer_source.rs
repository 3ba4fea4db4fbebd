/// Supplies the default committer identity, typically from user configuration.
///
/// `None` means the value could not be determined; building a
/// [`PersonIdent`](crate::PersonIdent) from such a source fails.
pub trait CommitterSource {
    fn committer_name(&self) -> Option<String>;

    fn committer_email(&self) -> Option<String>;
}
