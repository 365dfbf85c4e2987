//! 属性名校验
//!
//! 属性名必须非空、不含 NUL、不超过 [`XATTR_NAME_MAX`]。
//! 命名空间由宿主的处理器表按前缀分派，这里不解析。

use crate::consts::XATTR_NAME_MAX;
use crate::error::{Error, ErrorKind, Result};

/// 经过校验的属性名
///
/// 借用调用方的字节串，不复制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XattrName<'a> {
    bytes: &'a [u8],
}

impl<'a> XattrName<'a> {
    /// 校验并构造属性名
    ///
    /// # 错误
    ///
    /// - 空名称或含 NUL：`InvalidInput`
    /// - 超过 `XATTR_NAME_MAX`：`OutOfRange`
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput, "empty xattr name"));
        }
        if bytes.len() > XATTR_NAME_MAX {
            return Err(Error::new(ErrorKind::OutOfRange, "xattr name too long"));
        }
        if bytes.contains(&0) {
            return Err(Error::new(ErrorKind::InvalidInput, "xattr name contains NUL"));
        }
        Ok(Self { bytes })
    }

    /// 原始字节
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = XattrName::new(b"user.x").unwrap();
        assert_eq!(name.as_bytes(), b"user.x");
    }

    #[test]
    fn test_empty_or_nul() {
        assert_eq!(XattrName::new(b"").unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(XattrName::new(b"user.\0x").unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_name_length_limit() {
        let long = [b'a'; XATTR_NAME_MAX + 1];
        assert_eq!(XattrName::new(&long).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert!(XattrName::new(&long[..XATTR_NAME_MAX]).is_ok());
    }
}
