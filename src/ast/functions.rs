//! Function identities and the built-in function catalog.
//!
//! Functions in the `std` module render by bare name (`len(.name)`),
//! everything else renders module-qualified (`math::abs(.x)`).

use std::borrow::Cow;

use super::expr::Expr;

/// Module whose functions render without qualification.
pub const STD_MODULE: &str = "std";

/// A function identity: module + name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    pub module: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

impl Function {
    pub const fn builtin(module: &'static str, name: &'static str) -> Self {
        Self {
            module: Cow::Borrowed(module),
            name: Cow::Borrowed(name),
        }
    }

    /// User-defined function, e.g. one declared in the schema's `default` module.
    pub fn custom(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: Cow::Owned(module.into()),
            name: Cow::Owned(name.into()),
        }
    }

    /// Name as written in a query.
    pub fn qualified_name(&self) -> Cow<'_, str> {
        if self.module == STD_MODULE {
            Cow::Borrowed(self.name.as_ref())
        } else {
            Cow::Owned(format!("{}::{}", self.module, self.name))
        }
    }

    pub fn call(&self, args: impl IntoIterator<Item = Expr>) -> FuncInvocation {
        FuncInvocation {
            function: self.clone(),
            args: args.into_iter().collect(),
        }
    }

    pub fn call0(&self) -> FuncInvocation {
        self.call([])
    }

    pub fn call1(&self, arg: impl Into<Expr>) -> FuncInvocation {
        self.call([arg.into()])
    }

    pub fn call2(&self, first: impl Into<Expr>, second: impl Into<Expr>) -> FuncInvocation {
        self.call([first.into(), second.into()])
    }

    pub fn call3(
        &self,
        first: impl Into<Expr>,
        second: impl Into<Expr>,
        third: impl Into<Expr>,
    ) -> FuncInvocation {
        self.call([first.into(), second.into(), third.into()])
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// A function applied to an ordered argument list.
#[derive(Debug, Clone)]
pub struct FuncInvocation {
    pub function: Function,
    pub args: Vec<Expr>,
}

impl FuncInvocation {
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

macro_rules! functions {
    ($module:literal => $($ident:ident = $name:literal),* $(,)?) => {
        use super::Function;
        $(pub const $ident: Function = Function::builtin($module, $name);)*
    };
}

pub mod math {
    functions! { "math" =>
        ABS = "abs",
        CEIL = "ceil",
        FLOOR = "floor",
        LN = "ln",
        LG = "lg",
        LOG = "log",
        MEAN = "mean",
        STDDEV = "stddev",
        STDDEV_POP = "stddev_pop",
        VAR = "var",
        VAR_POP = "var_pop",
    }
}

pub mod stdlib {
    functions! { "std" =>
        LEN = "len",
        SUM = "sum",
        COUNT = "count",
        MIN = "min",
        MAX = "max",
        ALL = "all",
        ANY = "any",
        ENUMERATE = "enumerate",
        ROUND = "round",
        RANDOM = "random",
        CONTAINS = "contains",
        FIND = "find",
        ARRAY_AGG = "array_agg",
        ARRAY_GET = "array_get",
        ARRAY_UNPACK = "array_unpack",
        ARRAY_JOIN = "array_join",
        ASSERT_SINGLE = "assert_single",
        ASSERT_EXISTS = "assert_exists",
        ASSERT_DISTINCT = "assert_distinct",
        DATETIME_CURRENT = "datetime_current",
        DATETIME_OF_TRANSACTION = "datetime_of_transaction",
        DATETIME_OF_STATEMENT = "datetime_of_statement",
        DATETIME_GET = "datetime_get",
        DATETIME_TRUNCATE = "datetime_truncate",
        DURATION_GET = "duration_get",
        DURATION_TRUNCATE = "duration_truncate",
        TO_STR = "to_str",
        TO_JSON = "to_json",
        TO_DATETIME = "to_datetime",
        TO_DURATION = "to_duration",
        TO_BIGINT = "to_bigint",
        TO_DECIMAL = "to_decimal",
        TO_INT16 = "to_int16",
        TO_INT32 = "to_int32",
        TO_INT64 = "to_int64",
        TO_FLOAT32 = "to_float32",
        TO_FLOAT64 = "to_float64",
        STR_LOWER = "str_lower",
        STR_UPPER = "str_upper",
        STR_TITLE = "str_title",
        STR_PAD_START = "str_pad_start",
        STR_PAD_END = "str_pad_end",
        STR_TRIM = "str_trim",
        STR_TRIM_START = "str_trim_start",
        STR_TRIM_END = "str_trim_end",
        STR_REPEAT = "str_repeat",
        STR_SPLIT = "str_split",
        RE_MATCH = "re_match",
        RE_MATCH_ALL = "re_match_all",
        RE_REPLACE = "re_replace",
        RE_TEST = "re_test",
        JSON_TYPEOF = "json_typeof",
        JSON_GET = "json_get",
        JSON_ARRAY_UNPACK = "json_array_unpack",
        JSON_OBJECT_UNPACK = "json_object_unpack",
        UUID_GENERATE_V1MC = "uuid_generate_v1mc",
        UUID_GENERATE_V4 = "uuid_generate_v4",
        SEQUENCE_NEXT = "sequence_next",
        SEQUENCE_RESET = "sequence_reset",
    }
}

pub mod cal {
    functions! { "cal" =>
        TO_LOCAL_DATETIME = "to_local_datetime",
        TO_LOCAL_DATE = "to_local_date",
        TO_LOCAL_TIME = "to_local_time",
        TO_RELATIVE_DURATION = "to_relative_duration",
        TO_DATE_DURATION = "to_date_duration",
        TIME_GET = "time_get",
        DATE_GET = "date_get",
        DURATION_NORMALIZE_HOURS = "duration_normalize_hours",
        DURATION_NORMALIZE_DAYS = "duration_normalize_days",
    }
}

pub mod sys {
    functions! { "sys" =>
        GET_VERSION = "get_version",
        GET_VERSION_AS_STR = "get_version_as_str",
        GET_CURRENT_DATABASE = "get_current_database",
        GET_TRANSACTION_ISOLATION = "get_transaction_isolation",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_names() {
        assert_eq!(math::ABS.qualified_name(), "math::abs");
        assert_eq!(stdlib::LEN.qualified_name(), "len");
        assert_eq!(cal::TO_LOCAL_DATE.to_string(), "cal::to_local_date");
        assert_eq!(Function::custom("default", "exclamation").to_string(), "default::exclamation");
    }

    #[test]
    fn test_call_arity() {
        assert_eq!(stdlib::DATETIME_CURRENT.call0().arity(), 0);
        assert_eq!(stdlib::CONTAINS.call2("ab", "a").arity(), 2);
    }
}
