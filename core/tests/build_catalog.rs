use catalog_core::{build_catalog, parse_spec_document};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_build_catalog_end_to_end() {
    let spec = r#"
paths:
  /pets:
    get:
      summary: All the pets
      tags: [pets]
      x-audience: public
      parameters:
        - name: limit
          in: query
          type: integer
          x-examples: [10]
      responses:
        "200":
          description: OK
          schema:
            type: array
            items:
              type: object
              required: [name]
              example:
                name: Rex
              properties:
                name:
                  type: string
                  example: Rex
                  x-examples: [Rex, Fido]
                age:
                  type: integer
    post:
      operationId: registerPet
      parameters:
        - name: pet
          in: body
          schema:
            type: object
            properties:
              name: {type: string}
      responses:
        "201":
          description: Created
  /pets/{id}:
    delete:
      responses:
        "204":
          description: Gone
"#;

    let document = parse_spec_document(spec).unwrap();
    let endpoints = build_catalog(&document).unwrap();

    let catalog = serde_json::to_value(&endpoints).unwrap();

    assert_eq!(
        catalog,
        json!([
            {
                "route": "/pets",
                "method": "get",
                "name": "List pets",
                "description": "All the pets",
                "parameters": [
                    {
                        "name": "limit",
                        "source": "query",
                        "type": {"name": "integer", "isComplex": false, "isCollection": false},
                        "isOptional": true,
                        "examples": [10]
                    }
                ],
                "responses": [
                    {
                        "code": "200",
                        "description": "OK",
                        "type": {
                            "name": "array",
                            "isComplex": false,
                            "isCollection": true,
                            "collectionType": {
                                "name": "object",
                                "isComplex": true,
                                "isCollection": false,
                                "properties": [
                                    {
                                        "name": "name",
                                        "type": {"name": "string", "isComplex": false, "isCollection": false},
                                        "examples": ["Rex", "Rex", "Fido"],
                                        "isOptional": false
                                    },
                                    {
                                        "name": "age",
                                        "type": {"name": "integer", "isComplex": false, "isCollection": false},
                                        "examples": [],
                                        "isOptional": true
                                    }
                                ]
                            }
                        }
                    }
                ],
                "metadata": {"audience": "public"},
                "tags": ["pets"]
            },
            {
                "route": "/pets",
                "method": "post",
                "name": "registerPet",
                "parameters": [
                    {
                        "name": "pet",
                        "source": "body",
                        "type": {
                            "name": "object",
                            "isComplex": true,
                            "isCollection": false,
                            "properties": [
                                {
                                    "name": "name",
                                    "type": {"name": "string", "isComplex": false, "isCollection": false},
                                    "examples": [],
                                    "isOptional": true
                                }
                            ]
                        }
                    }
                ],
                "responses": [
                    {"code": "201", "description": "Created", "type": null}
                ]
            },
            {
                "route": "/pets/{id}",
                "method": "delete",
                "name": "Delete pet",
                "parameters": [],
                "responses": [
                    {"code": "204", "description": "Gone", "type": null}
                ]
            }
        ])
    );
}

#[test]
fn test_two_paths_three_operations_keep_declaration_order() {
    let spec = r#"
paths:
  /b:
    post: {}
    get: {}
  /a:
    get: {}
"#;

    let document = parse_spec_document(spec).unwrap();
    let endpoints = build_catalog(&document).unwrap();

    assert_eq!(endpoints.len(), 3);
    assert_eq!(
        endpoints
            .iter()
            .map(|e| format!("{} {}", e.method, e.route))
            .collect::<Vec<_>>(),
        vec!["post /b", "get /b", "get /a"]
    );
}
