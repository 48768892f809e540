#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! `waymark-core` 提供类型化路由描述符与路径解析的核心契约。
//!
//! # 教案背景（Why）
//! - 层级式、以屏幕为单位的导航需要三件事：声明可达目的地、用类型化参数构建可导航
//!   路径串、把观察到的路径串反向解析回产生它的描述符（典型用途：计算屏幕标题）；
//! - 路由模板代数与任何 UI 框架、任何从源码注解生成描述符表的工具链解耦，宿主只
//!   依赖本 crate 的纯内存计算。
//!
//! # 使用概览（How）
//! - 注册阶段：经 [`DestinationDescriptor::builder`] 声明目的地，按图聚合进
//!   [`GraphDescriptorSet`]，再以注册顺序挂入 [`CompositeRegistry`]；
//! - 导航时刻：[`PathBuilder`] 把 (描述符, 参数值) 变成路径串；
//! - 回程：[`CompositeRegistry::resolve`] 取回描述符，
//!   [`DestinationDescriptor::parse_path`] 还原解码后的参数值。
//!
//! # 合约说明（What）
//! - 所有表在注册阶段构造一次，此后不可变，可被任意数量的构建/解析调用无锁并发读取；
//! - 全部操作为确定性的同步纯计算：无 I/O、无阻塞、无重试、无超时；
//! - 嵌入路径的参数值一律按 RFC 3986 做百分号编码，`decode(encode(x)) == x` 对含
//!   `/`、`?`、`&`、`=` 与非 ASCII 文本的任意输入成立；
//! - 未匹配名称采取宽松策略返回 `None`；严格语义经 `resolve_required` 显式选用。
//!
//! # 风险提示与边界（Trade-offs）
//! - 这不是通用 URL 路由器：目的地名是图内唯一的字面首段，不支持通配符、正则段或
//!   基于优先级的模糊匹配；
//! - 若扩展场景需要注册阶段之后追加图，写入必须单写者且不得与并发读交错，本 crate
//!   的基线设计不提供该能力。

extern crate alloc;

pub mod descriptor;
pub mod encoding;
pub mod error;
pub mod graph;
pub mod path;
pub mod pattern;
pub mod registry;

pub use descriptor::{DescriptorBuilder, DestinationDescriptor, RESERVED_TITLE_KEY};
pub use encoding::{decode_component, encode_component};
pub use error::{RouteError, codes};
pub use graph::{GraphBuilder, GraphDescriptorSet};
pub use path::{PathArguments, PathBuilder};
pub use registry::CompositeRegistry;
