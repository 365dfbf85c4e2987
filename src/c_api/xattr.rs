//! xattr C API
//!
//! 成功返回非负值，失败总是返回严格为负的 `-errno`。缓冲区参数为 `None` 或空时为查询模式。

use crate::{
    Result,
    backend::XattrBackend,
    conn::{Connection, XattrHost},
    types::{NodeId, SetFlags, XattrBuf},
};

fn to_ssize(result: Result<usize>) -> isize {
    match result {
        Ok(n) => n as isize,
        Err(err) => -(err.errno().max(1) as isize),
    }
}

fn to_int(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => -err.errno().max(1),
    }
}

/// 设置扩展属性，`value` 为 `None` 时删除
///
/// `flags` 中的未知位会被忽略
pub fn xattr_set<B: XattrBackend, H: XattrHost>(
    conn: &Connection<B, H>,
    node: u64,
    name: &[u8],
    value: Option<&[u8]>,
    flags: u32,
) -> i32 {
    to_int(conn.set_attribute(NodeId(node), name, value, SetFlags::from_bits_truncate(flags)))
}

/// 获取扩展属性值
pub fn xattr_get<B: XattrBackend, H: XattrHost>(
    conn: &Connection<B, H>,
    node: u64,
    name: &[u8],
    value: Option<&mut [u8]>,
) -> isize {
    to_ssize(conn.get_attribute(NodeId(node), name, XattrBuf::from_option(value)))
}

/// 列出扩展属性名
pub fn xattr_list<B: XattrBackend, H: XattrHost>(
    conn: &Connection<B, H>,
    node: u64,
    list: Option<&mut [u8]>,
) -> isize {
    to_ssize(conn.list_attributes(NodeId(node), XattrBuf::from_option(list)))
}

/// 删除扩展属性
pub fn xattr_remove<B: XattrBackend, H: XattrHost>(conn: &Connection<B, H>, node: u64, name: &[u8]) -> i32 {
    to_int(conn.remove_attribute(NodeId(node), name))
}
