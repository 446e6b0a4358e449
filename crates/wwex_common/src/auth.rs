// --- File: crates/wwex_common/src/auth.rs ---
//! WWEX credentials as sent in SOAP headers.
//!
//! Both carriers authenticate with the same four-field token. SpeedShip wraps
//! it in an `AuthenticationDetail` header, SpeedFreight sends it directly.

use wwex_config::ApiInformation;

use crate::soap::{service_element, write_element, write_parent, SoapError, WriteXml, XmlWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationToken {
    pub login_id: String,
    pub password: String,
    pub license_key: String,
    pub account_number: String,
}

impl AuthenticationToken {
    pub fn from_api_information(api: &ApiInformation) -> Self {
        Self {
            login_id: api.user_name.clone(),
            password: api.password.clone(),
            license_key: api.auth_key.clone(),
            account_number: api.account_number.clone(),
        }
    }

    /// Writes the token under an element named `name`.
    pub fn write_as(&self, writer: &mut XmlWriter, name: &str) -> Result<(), SoapError> {
        write_parent(writer, name, |w| {
            write_element(w, "loginId", &self.login_id)?;
            write_element(w, "password", &self.password)?;
            write_element(w, "licenseKey", &self.license_key)?;
            write_element(w, "accountNumber", &self.account_number)
        })
    }
}

/// SpeedFreight header: the bare token.
impl WriteXml for AuthenticationToken {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        self.write_as(writer, &service_element("AuthenticationToken"))
    }
}

/// SpeedShip header: the token wrapped in `AuthenticationDetail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationDetail {
    pub authentication_token: AuthenticationToken,
}

impl WriteXml for AuthenticationDetail {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        write_parent(writer, &service_element("AuthenticationDetail"), |w| {
            self.authentication_token.write_as(w, "authenticationToken")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Writer;

    fn token() -> AuthenticationToken {
        AuthenticationToken::from_api_information(&ApiInformation {
            user_name: "shipper".to_string(),
            password: "p<ss".to_string(),
            auth_key: "LICENSE".to_string(),
            account_number: "W0001".to_string(),
            mode: "test".to_string(),
        })
    }

    fn render(value: &dyn WriteXml) -> String {
        let mut writer = Writer::new(Vec::new());
        value.write_xml(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_token_maps_credentials() {
        let xml = render(&token());
        assert_eq!(
            xml,
            "<ns1:AuthenticationToken><loginId>shipper</loginId><password>p&lt;ss</password>\
             <licenseKey>LICENSE</licenseKey><accountNumber>W0001</accountNumber></ns1:AuthenticationToken>"
        );
    }

    #[test]
    fn test_detail_wraps_token() {
        let xml = render(&AuthenticationDetail {
            authentication_token: token(),
        });
        assert!(xml.starts_with("<ns1:AuthenticationDetail><authenticationToken><loginId>shipper</loginId>"));
        assert!(xml.ends_with("</accountNumber></authenticationToken></ns1:AuthenticationDetail>"));
    }
}
