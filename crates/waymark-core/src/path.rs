//! 路径构建与反向抽取：描述符与具体参数值之间的双向桥。
//!
//! # 教案级说明
//! - **意图 (Why)**：导航时刻需要把 (描述符, 参数值) 变成可导航路径串；路径成为"当前路径"
//!   后，宿主又需要从串中还原出解码后的参数值（典型用途：计算屏幕标题）。两个方向共享
//!   同一份描述符与同一套编码规则，往返恒等才能成立；
//! - **契约 (What)**：
//!   - 位置参数按位置匹配，缺失即 [`RouteError::MissingArgument`]，多余即
//!     [`RouteError::UnexpectedArgument`]，绝不静默补默认值；
//!   - 查询参数值可选：缺失、`None` 或显式空串的键整体不出现在输出中，这是与位置参数的刻意
//!     不对称——缺失的查询值不是错误；
//!   - 所有嵌入值一律百分号编码，抽取时一律解码；
//! - **设计 (How)**：[`PathBuilder`] 以 Builder 风格聚合参数值，`build` 一次性校验并发射；
//!   [`DestinationDescriptor::parse_path`] 按模式的固定段序（名称、标题、位置段、查询尾）
//!   反向切分；
//! - **取舍 (Trade-offs)**：构建器持有值的所有权副本，牺牲少量分配换取 API 不与调用方
//!   生命周期纠缠。

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::descriptor::{DestinationDescriptor, RESERVED_TITLE_KEY};
use crate::encoding::{decode_component, encode_component};
use crate::error::RouteError;

/// 面向单个目的地的路径构建器。
///
/// # 教案式说明
/// - **意图 (Why)**：把"标题、位置值、查询值"的收集与校验分离：收集阶段永不失败，
///   全部前置条件集中在 [`build`](Self::build) 校验，调用方可以线性链式书写；
/// - **契约 (What)**：`positional` 的调用顺序即值的位置顺序；`query` 的键以描述符
///   声明顺序发射，未声明的键永远不会被读取；
/// - **取舍 (Trade-offs)**：重复提供同一查询键时首次出现生效，与"每个声明键至多
///   发射一次"的输出形状保持一致。
#[derive(Clone, Debug)]
pub struct PathBuilder<'a> {
    descriptor: &'a DestinationDescriptor,
    title: Option<String>,
    positional: Vec<String>,
    query: Vec<(String, String)>,
}

impl<'a> PathBuilder<'a> {
    /// 为给定描述符开启构建流程。
    pub fn new(descriptor: &'a DestinationDescriptor) -> Self {
        Self {
            descriptor,
            title: None,
            positional: Vec::new(),
            query: Vec::new(),
        }
    }

    /// 提供动态标题值。仅对 `dynamic_title` 为真的目的地合法。
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// 追加下一个位置参数值，按调用顺序与声明的参数逐一匹配。
    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// 提供一个查询参数值。
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// 提供一个可选查询参数值，`None` 等价于完全不提供该键。
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// 校验参数完备性并发射可导航路径串。
    ///
    /// # 契约 (What)
    /// - **前置条件**：`dynamic_title` 为真时必须已提供标题；位置值数量与声明一致；
    /// - **输出形状**：`名称[/编码标题][/编码位置值…][?k=编码值&…]`，查询尾只包含
    ///   实际提供了值的声明键，无尾部 `&`；
    /// - **后置条件**：输出可被 [`DestinationDescriptor::parse_path`] 无损还原。
    pub fn build(self) -> Result<String, RouteError> {
        let descriptor = self.descriptor;
        let declared = descriptor.positional_params();

        if descriptor.dynamic_title() && self.title.is_none() {
            return Err(RouteError::MissingArgument {
                destination: descriptor.name().to_string(),
                name: RESERVED_TITLE_KEY.to_string(),
            });
        }
        if self.positional.len() < declared.len() {
            return Err(RouteError::MissingArgument {
                destination: descriptor.name().to_string(),
                name: declared[self.positional.len()].clone(),
            });
        }
        if self.positional.len() > declared.len() {
            return Err(RouteError::UnexpectedArgument {
                destination: descriptor.name().to_string(),
                expected: declared.len(),
                supplied: self.positional.len(),
            });
        }
        // 越界的标题计入 supplied，保证错误消息中的计数自洽（supplied 恒大于 expected）。
        if !descriptor.dynamic_title() && self.title.is_some() {
            return Err(RouteError::UnexpectedArgument {
                destination: descriptor.name().to_string(),
                expected: declared.len(),
                supplied: declared.len() + 1,
            });
        }

        let mut path = String::from(descriptor.name());

        if let Some(title) = &self.title {
            path.push('/');
            path.push_str(&encode_component(title));
        }
        for value in &self.positional {
            path.push('/');
            path.push_str(&encode_component(value));
        }

        let mut first_query = true;
        for key in descriptor.query_params() {
            let Some((_, value)) = self.query.iter().find(|(k, _)| k == key) else {
                continue;
            };
            // 显式置空与缺失同义：键整体不出现在输出中。
            if value.is_empty() {
                continue;
            }
            path.push(if first_query { '?' } else { '&' });
            first_query = false;
            path.push_str(key);
            path.push('=');
            path.push_str(&encode_component(value));
        }

        Ok(path)
    }
}

/// 从路径串中抽取出的解码参数值。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathArguments {
    title: Option<String>,
    positional: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl PathArguments {
    /// 解码后的动态标题值；目的地未声明动态标题时恒为 `None`。
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// 按参数名取解码后的位置值。
    pub fn positional(&self, name: &str) -> Option<&str> {
        self.positional
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 声明顺序的位置值序列。
    pub fn positional_values(&self) -> impl Iterator<Item = &str> {
        self.positional.iter().map(|(_, value)| value.as_str())
    }

    /// 按键取解码后的查询值；键未声明或路径中缺失时为 `None`。
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }
}

impl DestinationDescriptor {
    /// 为该描述符开启路径构建流程，等价于 [`PathBuilder::new`]。
    pub fn path_builder(&self) -> PathBuilder<'_> {
        PathBuilder::new(self)
    }

    /// 反向抽取：按描述符的段序切分路径串并解码全部参数值。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：宿主从"当前路径"还原参数的标准入口，典型用途是取动态标题；
    /// - **契约 (What)**：
    ///   - **前置条件**：路径首段必须与本描述符同名（通常先经解析器定位描述符），
    ///     否则返回 [`RouteError::UnknownDestination`]；
    ///   - 位置段不足返回 [`RouteError::MissingArgument`]，多余返回
    ///     [`RouteError::UnexpectedArgument`]，解码失败返回
    ///     [`RouteError::EncodingMismatch`]；
    ///   - 查询尾中未声明的键与无 `=` 的残缺键值对按宽松策略忽略，重复键首次出现生效；
    /// - **后置条件**：对 [`PathBuilder::build`] 的任何成功输出，抽取结果与输入值
    ///   逐一相等。
    pub fn parse_path(&self, raw: &str) -> Result<PathArguments, RouteError> {
        let (path_part, query_part) = match raw.find('?') {
            Some(at) => (&raw[..at], Some(&raw[at + 1..])),
            None => (raw, None),
        };

        let mut segments = path_part.split('/');
        let leading = segments.next().unwrap_or_default();
        if leading != self.name() {
            return Err(RouteError::UnknownDestination {
                path: raw.to_string(),
            });
        }
        let segments: Vec<&str> = segments.collect();

        let title_slots = usize::from(self.dynamic_title());
        let declared = self.positional_params();
        let expected = title_slots + declared.len();

        if segments.len() < expected {
            let name = if self.dynamic_title() && segments.is_empty() {
                RESERVED_TITLE_KEY.to_string()
            } else {
                declared[segments.len() - title_slots].clone()
            };
            return Err(RouteError::MissingArgument {
                destination: self.name().to_string(),
                name,
            });
        }
        if segments.len() > expected {
            return Err(RouteError::UnexpectedArgument {
                destination: self.name().to_string(),
                expected: declared.len(),
                supplied: segments.len() - title_slots,
            });
        }

        let title = if self.dynamic_title() {
            Some(decode_component(segments[0])?)
        } else {
            None
        };

        let mut positional = Vec::with_capacity(declared.len());
        for (param, segment) in declared.iter().zip(&segments[title_slots..]) {
            positional.push((param.clone(), decode_component(segment)?));
        }

        let mut query: Vec<(String, String)> = Vec::new();
        if let Some(tail) = query_part {
            for pair in tail.split('&') {
                let Some((key, value)) = pair.split_once('=') else {
                    continue;
                };
                if !self.query_params().iter().any(|declared| declared == key) {
                    continue;
                }
                if query.iter().any(|(seen, _)| seen == key) {
                    continue;
                }
                query.push((key.to_string(), decode_component(value)?));
            }
        }

        Ok(PathArguments {
            title,
            positional,
            query,
        })
    }
}
