use std::{borrow::Cow, str::FromStr};

use anyhow::Context;

#[inline(always)]
pub(crate) fn from_env_or(name: &str, default_value: &'static str) -> Cow<'static, str> {
    std::env::var(name)
        .ok()
        .map(Cow::Owned)
        .unwrap_or(Cow::Borrowed(default_value))
}

pub(crate) fn parse_env_or<V>(name: &str, default_value: V) -> anyhow::Result<V>
where
    V: FromStr,
    <V as FromStr>::Err: Send + Sync + 'static,
    <V as FromStr>::Err: std::error::Error,
    anyhow::Error: From<<V as FromStr>::Err>,
{
    match std::env::var(name) {
        Ok(value) => {
            let parsed = value
                .parse()
                .with_context(|| format!("parsing {name}={value:?}"))?;
            Ok(parsed)
        }
        Err(_) => Ok(default_value),
    }
}

pub(crate) fn encode_params<'a>(
    values: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<Option<String>, serde_urlencoded::ser::Error> {
    let params = Vec::from_iter(values);
    if params.is_empty() {
        Ok(None)
    } else {
        serde_urlencoded::to_string(&params).map(Some)
    }
}

pub(crate) fn encode_url<'a>(
    path: &'a str,
    params: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<Cow<'a, str>, serde_urlencoded::ser::Error> {
    Ok(match encode_params(params)? {
        Some(values) => Cow::Owned(format!("{path}?{values}")),
        None => Cow::Borrowed(path),
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn should_keep_path_without_params() {
        let url = super::encode_url("/login", std::iter::empty()).unwrap();
        assert_eq!(url, "/login");
    }

    #[test]
    fn should_encode_params_in_order() {
        let url = super::encode_url(
            "https://your.domain.com/authorize",
            [("client_id", "abc"), ("redirect_uri", "http://localhost/cb")].into_iter(),
        )
        .unwrap();
        assert_eq!(
            url,
            "https://your.domain.com/authorize?client_id=abc&redirect_uri=http%3A%2F%2Flocalhost%2Fcb"
        );
    }

    #[test]
    fn should_fallback_when_variable_missing() {
        let value = super::parse_env_or("MYAPP_HELPER_TEST_MISSING", 42u16).unwrap();
        assert_eq!(value, 42);
        let value = super::from_env_or("MYAPP_HELPER_TEST_MISSING", "default");
        assert_eq!(value, "default");
    }
}
