//! 请求记录
//!
//! 调度器传给后端的输入/输出参数记录，字段与 FUSE 协议的
//! `fuse_setxattr_in`、`fuse_getxattr_in`、`fuse_getxattr_out` 一致。

use crate::types::SetFlags;

/// setxattr 输入参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetxattrIn {
    /// 属性值长度
    pub size: u32,
    /// 创建语义（[`SetFlags`] 的位）
    pub flags: u32,
}

impl SetxattrIn {
    /// 构造 setxattr 参数
    pub fn new(size: usize, flags: SetFlags) -> Self {
        Self {
            size: size as u32,
            flags: flags.bits(),
        }
    }

    /// 解析创建语义，忽略未知位
    pub fn set_flags(&self) -> SetFlags {
        SetFlags::from_bits_truncate(self.flags)
    }
}

/// getxattr / listxattr 输入参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetxattrIn {
    /// 调用方缓冲区大小，0 表示只查询大小
    pub size: u32,
    /// 填充
    pub padding: u32,
}

impl GetxattrIn {
    /// 构造 getxattr 参数
    pub fn new(size: usize) -> Self {
        Self {
            size: size as u32,
            padding: 0,
        }
    }
}

/// getxattr / listxattr 查询模式的输出描述符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetxattrOut {
    /// 后端报告的所需大小
    pub size: u32,
    /// 填充
    pub padding: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setxattr_in_flags() {
        let arg = SetxattrIn::new(5, SetFlags::REPLACE);
        assert_eq!(arg.size, 5);
        assert_eq!(arg.set_flags(), SetFlags::REPLACE);
    }

    #[test]
    fn test_unknown_flag_bits_dropped() {
        let arg = SetxattrIn { size: 0, flags: 0x8 | 0x1 };
        assert_eq!(arg.set_flags(), SetFlags::CREATE);
    }

    #[test]
    fn test_getxattr_in_query() {
        let arg = GetxattrIn::new(0);
        assert_eq!(arg.size, 0);
        assert_eq!(arg.padding, 0);
    }
}
