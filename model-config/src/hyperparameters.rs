use crate::common::*;

/// The keys under which the model section is looked up.
const MODEL_KEYS: &[&str] = &["MODEL", "model"];

/// The flat mapping of model hyperparameters.
pub type Hyperparameters = IndexMap<String, Value>;

/// Copy the key/value pairs of the `MODEL` section of a configuration.
///
/// The configuration must be an object with a `MODEL` (or `model`) member
/// that is itself an object. Values are cloned, and the key order of the
/// section is preserved.
pub fn model_hyperparameters(config: &Value) -> Result<Hyperparameters> {
    let model = MODEL_KEYS
        .iter()
        .find_map(|key| config.get(key))
        .ok_or_else(|| format_err!("the config does not have a MODEL section"))?;
    let model = model
        .as_object()
        .ok_or_else(|| format_err!("the MODEL section must be a mapping, but get {}", model))?;

    let params: Hyperparameters = model
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    debug!("extracted {} model hyperparameters", params.len());
    Ok(params)
}
