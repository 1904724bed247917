use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of `inventario`. Only `id` is typed; every other column passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joya {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Joya {
    pub fn self_link(&self) -> String {
        format!("/joyas/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoyaLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// A listed row augmented with its resource link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedJoya {
    #[serde(flatten)]
    pub joya: Joya,
    pub links: JoyaLinks,
}

impl From<Joya> for LinkedJoya {
    fn from(mut joya: Joya) -> Self {
        // a column named `links` would otherwise be emitted twice
        joya.attributes.remove("links");
        let links = JoyaLinks {
            self_link: joya.self_link(),
        };
        LinkedJoya { joya, links }
    }
}

/// Response body of `GET /joyas`.
#[derive(Debug, Clone, Serialize)]
pub struct JoyasPage {
    pub total: i64,
    pub page: i64,
    pub limits: i64,
    pub data: Vec<LinkedJoya>,
}
