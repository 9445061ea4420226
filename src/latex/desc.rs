//! Object description environments.
//!
//! A `desc` node holds one or more signatures followed by a content body.
//! Signature parts (type, class, name, parameters) are collected into a
//! [`DescEntry`] while the signature is walked; when the signature closes,
//! the entry is formatted as either the opening of the description
//! environment or, for later signatures, a continuation line under the same
//! body.

/// Environment used for each description type.
const ENVIRONMENTS: &[(&str, &str)] = &[
    ("function", "funcdesc"),
    ("class", "classdesc"),
    ("method", "methoddesc"),
    ("exception", "excdesc"),
    ("data", "datadesc"),
    ("attribute", "memberdesc"),
    ("opcode", "opcodedesc"),
    ("cfunction", "cfuncdesc"),
    ("cmember", "cmemberdesc"),
    ("cmacro", "csimplemacrodesc"),
    ("ctype", "ctypedesc"),
    ("cvar", "cvardesc"),
    ("describe", "describe"),
];

/// Fallback environment for unregistered description types.
const GENERIC_ENVIRONMENT: &str = "describe";

/// Description type whose signatures never get anchors.
pub const GENERIC_DESCTYPE: &str = "describe";

/// Environment name for a description type.
pub fn environment_for(desctype: &str) -> &'static str {
    ENVIRONMENTS
        .iter()
        .find(|(kind, _)| *kind == desctype)
        .map(|(_, env)| *env)
        .unwrap_or(GENERIC_ENVIRONMENT)
}

/// Signature parts recorded by the `desc_*` child nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignaturePart {
    Type,
    ClassName,
    Name,
    Parameters,
}

/// Accumulator for one open description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescEntry {
    pub env: &'static str,
    pub desctype: String,
    pub noindex: bool,
    pub type_name: String,
    pub class_name: String,
    pub name: String,
    pub params: String,
    /// Signatures emitted so far.
    pub count: usize,
}

impl DescEntry {
    pub fn new(desctype: &str, noindex: bool) -> Self {
        Self {
            env: environment_for(desctype),
            desctype: desctype.to_string(),
            noindex,
            type_name: String::new(),
            class_name: String::new(),
            name: String::new(),
            params: String::new(),
            count: 0,
        }
    }

    /// Record an escaped signature part.
    pub fn record(&mut self, part: SignaturePart, text: String) {
        match part {
            SignaturePart::Type => self.type_name = text,
            SignaturePart::ClassName => self.class_name = text,
            SignaturePart::Name => self.name = text,
            SignaturePart::Parameters => self.params = text,
        }
    }

    /// Whether signatures of this description may carry anchors.
    pub fn wants_anchor(&self) -> bool {
        self.desctype != GENERIC_DESCTYPE
    }

    fn index_suffix(&self) -> &'static str {
        if self.noindex { "ni" } else { "" }
    }

    /// Format the signature that just closed and count it.
    ///
    /// `anchor` is an already formatted hypertarget placed in front of the
    /// signature.
    pub fn finish_signature(&mut self, anchor: &str) -> String {
        let trimmed = self.class_name.trim_end_matches('.').len();
        self.class_name.truncate(trimmed);

        let opening = if self.count == 0 {
            format!("\n\n{anchor}\\begin{{{}{}}}", self.env, self.index_suffix())
        } else {
            let stem = self.env.get(..self.env.len().saturating_sub(4)).unwrap_or("");
            format!("\n{anchor}\\{stem}line{}", self.index_suffix())
        };
        self.count += 1;

        opening + &self.arguments()
    }

    /// Closing markup for the whole description.
    pub fn end(&self) -> String {
        format!("\\end{{{}{}}}\n", self.env, self.index_suffix())
    }

    fn arguments(&self) -> String {
        let Self {
            type_name,
            class_name,
            name,
            params,
            ..
        } = self;
        match self.env {
            "funcdesc" | "classdesc" | "opcodedesc" => format!("{{{name}}}{{{params}}}"),
            "methoddesc" => format!("[{class_name}]{{{name}}}{{{params}}}"),
            "memberdesc" => format!("[{class_name}]{{{name}}}"),
            "cfuncdesc" => format!("{{{type_name}}}{{{name}}}{{{params}}}"),
            "cmemberdesc" => {
                let (member_type, container) = match type_name.rsplit_once(' ') {
                    Some((member_type, container)) => {
                        (member_type, container.trim_end_matches('.'))
                    }
                    None => (type_name.as_str(), ""),
                };
                format!("{{{container}}}{{{member_type}}}{{{name}}}")
            }
            "cvardesc" => format!("{{{type_name}}}{{{name}}}"),
            _ => format!("{{{name}}}"),
        }
    }
}
