#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    DirectoryNotFound = 3,
    NoMatch = 4,
    LookupError = 5,
    TransportError = 6,
    PermissionError = 7,
    TargetExists = 8,
    PartialRename = 9,
    ConfigError = 10,
    RenameError = 11,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}
