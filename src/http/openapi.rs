//! OpenAPI document served at `/v3/api-docs`.

use serde_json::{json, Value};

pub const SECURITY_SCHEME_NAME: &str = "ApiKeyAuth";

pub fn document() -> Value {
    let tariff_ref = json!({ "$ref": "#/components/schemas/Tariff" });
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    });
    let tariff_body = json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/TariffInput" } } }
    });
    let tariff_ok = json!({
        "description": "OK",
        "content": { "application/json": { "schema": tariff_ref } }
    });
    let not_found = json!({ "description": "Not Found" });

    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "WiFi API",
            "version": "1.0.0",
            "description": "API for managing WiFi tariffs"
        },
        "security": [{ SECURITY_SCHEME_NAME: [] }],
        "paths": {
            "/tariffs": {
                "post": {
                    "operationId": "createTariff",
                    "requestBody": tariff_body,
                    "responses": { "200": tariff_ok, "409": { "description": "Conflict" } }
                }
            },
            "/tariffs/{id}": {
                "get": {
                    "operationId": "getTariff",
                    "parameters": [id_param],
                    "responses": { "200": tariff_ok, "404": not_found }
                },
                "put": {
                    "operationId": "updateTariff",
                    "parameters": [id_param],
                    "requestBody": tariff_body,
                    "responses": { "200": tariff_ok, "404": not_found, "409": { "description": "Conflict" } }
                },
                "delete": {
                    "operationId": "deleteTariff",
                    "parameters": [id_param],
                    "responses": { "200": tariff_ok, "404": not_found }
                }
            },
            "/dummy-list-all-tariffs": {
                "get": {
                    "operationId": "listAllTariffs",
                    "security": [],
                    "responses": { "200": {
                        "description": "OK",
                        "content": { "application/json": { "schema": { "type": "array", "items": tariff_ref } } }
                    } }
                }
            },
            "/dummy-remote-tariffs": {
                "get": {
                    "operationId": "getDummyRemoteTariffs",
                    "security": [],
                    "responses": { "200": {
                        "description": "OK",
                        "content": { "application/json": { "schema": { "type": "array", "items": tariff_ref } } }
                    } }
                }
            }
        },
        "components": {
            "schemas": {
                "Tariff": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "features": { "type": "array", "items": { "type": "string" } },
                        "prices": { "type": "object", "additionalProperties": { "type": "number", "format": "double" } },
                        "remoteId": { "type": "integer", "format": "int64", "nullable": true }
                    }
                },
                "TariffInput": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string" },
                        "features": { "type": "array", "items": { "type": "string" } },
                        "prices": { "type": "object", "additionalProperties": { "type": "number", "format": "double" } },
                        "remoteId": { "type": "integer", "format": "int64", "nullable": true }
                    }
                }
            },
            "securitySchemes": {
                SECURITY_SCHEME_NAME: {
                    "type": "apiKey",
                    "name": "X-API-KEY",
                    "in": "header"
                }
            }
        }
    })
}
