//! 错误类型定义
//!
//! 提供扩展属性桥接层的错误类型。
//!
//! 错误分为两类：
//! - 由本层自行决定的错误（`Unsupported`、`PermissionDenied`、`MalformedList`）
//! - 后端返回的错误，原样透传给调用者

use crate::consts::*;
use core::fmt;

/// 扩展属性操作错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: &'static str,
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 操作不被后端支持（结果会被缓存）
    Unsupported,
    /// 后端未实现该操作
    ///
    /// 仅用于后端向本层报告，调度器会将其转换为 `Unsupported`
    NotImplemented,
    /// 权限错误
    PermissionDenied,
    /// 后端返回的属性列表格式错误（I/O 类错误）
    MalformedList,
    /// I/O 错误
    Io,
    /// 无效参数
    InvalidInput,
    /// 属性不存在
    NotFound,
    /// 属性已存在
    AlreadyExists,
    /// 空间不足
    NoSpace,
    /// 缓冲区太小或名称过长
    OutOfRange,
    /// 属性值过大
    TooBig,
    /// 设备忙
    Busy,
    /// 后端给出的原始 errno
    Other(i32),
}

/// 取 errno 的绝对值，0 和无法取反的值视为 EIO
const fn normalize_errno(errno: i32) -> i32 {
    match errno {
        0 | i32::MIN => EIO,
        e if e < 0 => -e,
        e => e,
    }
}

impl ErrorKind {
    /// 是否属于 I/O 类错误
    pub const fn is_io_class(self) -> bool {
        matches!(self, ErrorKind::Io | ErrorKind::MalformedList)
    }

    /// 转换为 POSIX errno（正值）
    pub const fn errno(self) -> i32 {
        match self {
            ErrorKind::Unsupported => EOPNOTSUPP,
            ErrorKind::NotImplemented => ENOSYS,
            ErrorKind::PermissionDenied => EACCES,
            ErrorKind::MalformedList | ErrorKind::Io => EIO,
            ErrorKind::InvalidInput => EINVAL,
            ErrorKind::NotFound => ENODATA,
            ErrorKind::AlreadyExists => EEXIST,
            ErrorKind::NoSpace => ENOSPC,
            ErrorKind::OutOfRange => ERANGE,
            ErrorKind::TooBig => E2BIG,
            ErrorKind::Busy => EBUSY,
            ErrorKind::Other(errno) => normalize_errno(errno),
        }
    }

    /// 从 POSIX errno 构造
    ///
    /// 接受正负两种写法（`ENODATA` 或 `-ENODATA`），0 视为 `Io`；
    /// 未知的 errno 保留为 `Other`
    pub const fn from_errno(errno: i32) -> Self {
        match normalize_errno(errno) {
            EOPNOTSUPP => ErrorKind::Unsupported,
            ENOSYS => ErrorKind::NotImplemented,
            EACCES | EPERM => ErrorKind::PermissionDenied,
            EIO => ErrorKind::Io,
            EINVAL => ErrorKind::InvalidInput,
            ENODATA => ErrorKind::NotFound,
            EEXIST => ErrorKind::AlreadyExists,
            ENOSPC => ErrorKind::NoSpace,
            ERANGE => ErrorKind::OutOfRange,
            E2BIG => ErrorKind::TooBig,
            EBUSY => ErrorKind::Busy,
            other => ErrorKind::Other(other),
        }
    }
}

impl Error {
    /// 创建新错误
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    /// 从后端给出的 errno 创建错误
    pub const fn from_errno(errno: i32) -> Self {
        Self {
            kind: ErrorKind::from_errno(errno),
            message: "backend error",
        }
    }

    /// 获取错误类型
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 获取错误消息
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// 对应的 POSIX errno（正值）
    pub const fn errno(&self) -> i32 {
        self.kind.errno()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result 类型别名
pub type Result<T> = core::result::Result<T, Error>;
