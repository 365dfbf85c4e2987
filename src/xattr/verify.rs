//! 属性列表校验
//!
//! 后端是不可信代码。宿主会把列表当作一串以 NUL 结尾的名称来遍历，
//! 未结尾或为空的条目必须在这里拦下。

use crate::error::{Error, ErrorKind, Result};

/// 校验填充模式下后端返回的属性列表
///
/// `list` 必须恰好是后端声称写入的 n 个字节。逐段扫描以 NUL 分隔的名称：
/// - 名称长度为 0：失败
/// - 直到剩余区间末尾都没有 NUL：失败
///
/// # 返回
///
/// 成功返回列表长度
pub fn verify_xattr_list(list: &[u8]) -> Result<usize> {
    let mut rest = list;

    while !rest.is_empty() {
        let this_len = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());

        if this_len == 0 || this_len == rest.len() {
            log::warn!("[XATTR] malformed list from backend ({} bytes)", list.len());
            return Err(Error::new(ErrorKind::MalformedList, "malformed xattr list"));
        }

        rest = &rest[this_len + 1..];
    }

    Ok(list.len())
}
