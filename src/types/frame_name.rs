/// Prefix and frame number parsed from a sequence file name
#[derive(Debug, PartialEq, Eq)]
pub struct FrameName {
    pub prefix: String,
    pub number: u64,
}
