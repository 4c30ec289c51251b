use serde::{Deserialize, de::{Deserializer, Error}};
use serde_json::Value;
use crate::error::Application;

#[derive(Debug)]
pub enum Response<T> {
    Success(T),
    Failure(Application),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    response: Value,
    #[serde(default)]
    in_error: bool,
}

impl<'d, T: Deserialize<'d>> Deserialize<'d> for Response<T> {
    fn deserialize<D: Deserializer<'d>>(de: D) -> Result<Self, D::Error> {
        let Envelope { response, in_error } = Envelope::deserialize(de)?;
        Ok(match in_error {
            false => Response::Success(T::deserialize(response).map_err(D::Error::custom)?),
            true  => Response::Failure(Application::deserialize(response).map_err(D::Error::custom)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;
    use super::*;

    #[test]
    fn success_passes_response_through() -> Result<()> {
        let body = json!({"response": {"username": "rapture"}, "inError": false, "success": true});
        match serde_json::from_value::<Response<Value>>(body)? {
            Response::Success(v) => assert_eq!(json!({"username": "rapture"}), v),
            Response::Failure(f) => panic!("unexpected failure {:?}", f),
        }
        Ok(())
    }

    #[test]
    fn failure_decodes_error_record() -> Result<()> {
        let body = json!({"response": {"message": "denied", "code": 401, "id": "x1"}, "inError": true});
        match serde_json::from_value::<Response<Value>>(body)? {
            Response::Success(v) => panic!("unexpected success {:?}", v),
            Response::Failure(f) => {
                assert_eq!(401, f.code);
                assert_eq!("denied", f.message);
                assert_eq!(Some("x1".to_owned()), f.id);
            }
        }
        Ok(())
    }

    #[test]
    fn missing_flag_is_success() -> Result<()> {
        let body = json!({"response": [1, 2, 3]});
        assert!(matches!(serde_json::from_value::<Response<Value>>(body)?, Response::Success(_)));
        Ok(())
    }
}
