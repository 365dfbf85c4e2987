//! 双模式缓冲区协议
//!
//! getxattr 和 listxattr 实际上是两个操作合在一次调用里：
//! - 查询模式：后端把结果长度写入 [`GetxattrOut`]，返回值为 `min(size, MAX)`
//! - 填充模式：后端直接写入调用方缓冲区，返回写入的字节数
//!
//! 两种模式共用同一条后端调用路径，唯一的区别是接入哪个输出描述符。

use crate::backend::XattrReply;
use crate::error::{Error, ErrorKind, Result};
use crate::types::XattrBuf;
use crate::wire::{GetxattrIn, GetxattrOut};

/// 双模式调用的结果
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Reply<'a> {
    /// 查询模式，已截断到上限的所需大小
    Size(usize),
    /// 填充模式，后端实际写入的部分
    Filled(&'a [u8]),
}

impl Reply<'_> {
    /// 返回给调用方的计数
    pub(crate) fn len(&self) -> usize {
        match self {
            Reply::Size(size) => *size,
            Reply::Filled(data) => data.len(),
        }
    }
}

/// 以调用方缓冲区的模式调用后端
///
/// # 参数
///
/// * `buf` - 调用方缓冲区
/// * `max` - 查询结果和缓冲区容量的上限（`XATTR_SIZE_MAX` 或 `XATTR_LIST_MAX`）
/// * `call` - 后端调用，接收输入参数和输出描述符
///
/// 填充模式下后端声称写入的字节数超过缓冲区容量时返回 `Io` 错误
pub(crate) fn call_dual_mode<'a, F>(buf: XattrBuf<'a>, max: usize, call: F) -> Result<Reply<'a>>
where
    F: FnOnce(&GetxattrIn, XattrReply<'_>) -> Result<usize>,
{
    match buf {
        XattrBuf::Fill(data) if !data.is_empty() => {
            let cap = data.len().min(max);
            let data = &mut data[..cap];
            let arg = GetxattrIn::new(cap);

            let written = call(&arg, XattrReply::Data(&mut *data))?;
            if written > cap {
                log::warn!("[XATTR] backend claims {} bytes written into {} byte buffer", written, cap);
                return Err(Error::new(ErrorKind::Io, "backend overran reply buffer"));
            }
            Ok(Reply::Filled(&data[..written]))
        }
        _ => {
            let arg = GetxattrIn::new(0);
            let mut out = GetxattrOut::default();

            call(&arg, XattrReply::Size(&mut out))?;
            let reported = out.size as usize;
            if reported > max {
                log::warn!("[XATTR] backend reported size {} clamped to {}", reported, max);
            }
            Ok(Reply::Size(reported.min(max)))
        }
    }
}
