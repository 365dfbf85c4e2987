//! 常量定义
//!
//! 这个模块包含桥接层的所有常量，包括：
//! - 扩展属性的尺寸上限
//! - POSIX ACL 属性名
//! - 错误码

//=============================================================================
// 尺寸上限
//=============================================================================

/// 单个属性值的最大字节数
pub const XATTR_SIZE_MAX: usize = 65536;

/// 属性列表的最大字节数
pub const XATTR_LIST_MAX: usize = 65536;

/// 属性名的最大字节数（不含结尾 NUL）
pub const XATTR_NAME_MAX: usize = 255;

//=============================================================================
// POSIX ACL 属性名
//=============================================================================

/// POSIX ACL（访问）属性名
pub const XATTR_NAME_POSIX_ACL_ACCESS: &str = "system.posix_acl_access";

/// POSIX ACL（默认）属性名
pub const XATTR_NAME_POSIX_ACL_DEFAULT: &str = "system.posix_acl_default";

//=============================================================================
// 错误码（与 Linux errno 兼容）
//=============================================================================

/// 成功
pub const EOK: i32 = 0;

/// 操作不允许
pub const EPERM: i32 = 1;

/// I/O 错误
pub const EIO: i32 = 5;

/// 参数列表过长
pub const E2BIG: i32 = 7;

/// 权限不足
pub const EACCES: i32 = 13;

/// 设备忙
pub const EBUSY: i32 = 16;

/// 已存在
pub const EEXIST: i32 = 17;

/// 无效参数
pub const EINVAL: i32 = 22;

/// 设备上没有空间
pub const ENOSPC: i32 = 28;

/// 结果超出范围
pub const ERANGE: i32 = 34;

/// 功能未实现
pub const ENOSYS: i32 = 38;

/// 没有可用数据（属性不存在）
pub const ENODATA: i32 = 61;

/// 不支持的操作
pub const EOPNOTSUPP: i32 = 95;
