//! End-to-end generation from upstream interface documents.

use yapit_codegen::Severity;
use yapit_codegen_typescript::{Artifacts, GenerateOptions, Generator};
use yapit_manifest::{CollisionPolicy, InterfaceResponse, NamingConfig, RoleSuffix};

fn generate(document: &str, options: GenerateOptions) -> eyre::Result<Artifacts> {
    let response: InterfaceResponse = serde_json::from_str(document)?;
    let endpoint = response.into_detail()?.to_endpoint();
    Generator::new(options).generate(&endpoint)
}

const WITHDRAW: &str = r#"{
    "errcode": 0,
    "errmsg": "成功！",
    "data": {
        "title": "提现",
        "path": "/finance/bill_file_task/withdraw",
        "method": "POST",
        "req_body_type": "json",
        "req_body_other": "{\"type\":\"object\",\"properties\":{\"id\":{\"type\":\"string\",\"description\":\"任务ID\"},\"meta\":{\"type\":\"object\",\"properties\":{\"ts\":{\"type\":\"integer\"}}}},\"required\":[\"id\"]}",
        "res_body_type": "json",
        "res_body": {
            "type": "object",
            "properties": {
                "code": { "type": "integer" },
                "data": {
                    "type": "object",
                    "properties": {
                        "records": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "billNo": { "type": "string" },
                                    "amount": { "type": "integer", "format": "int64" }
                                },
                                "required": ["billNo"]
                            }
                        },
                        "total": { "type": "integer" }
                    }
                },
                "msg": { "type": "string" }
            },
            "required": ["code"]
        }
    }
}"#;

#[test]
fn test_withdraw_types() {
    let artifacts = generate(WITHDRAW, GenerateOptions::default()).unwrap();

    insta::assert_snapshot!(artifacts.types, @r"
    /**
     * 提现
     * @path /finance/bill_file_task/withdraw
     * @method POST
     */

    export interface FinanceBillFileTaskWithdrawPOSTReqMeta {
      ts?: number;
    }

    export interface FinanceBillFileTaskWithdrawPOSTReq {
      /** 任务ID */
      id: string;
      meta?: FinanceBillFileTaskWithdrawPOSTReqMeta;
    }

    export interface FinanceBillFileTaskWithdrawPOSTResDataRecordsItem {
      billNo: string;
      amount?: number;
    }

    export interface FinanceBillFileTaskWithdrawPOSTResData {
      records?: FinanceBillFileTaskWithdrawPOSTResDataRecordsItem[];
      total?: number;
    }

    export interface FinanceBillFileTaskWithdrawPOSTRes {
      code: number;
      data?: FinanceBillFileTaskWithdrawPOSTResData;
      msg?: string;
    }
    ");
}

#[test]
fn test_withdraw_api_with_service_prefix() {
    let options = GenerateOptions {
        request_path: Some("/finance-service/finance/bill_file_task/withdraw".to_string()),
        ..GenerateOptions::default()
    };
    let artifacts = generate(WITHDRAW, options).unwrap();

    insta::assert_snapshot!(artifacts.api, @r"
    import axios from 'axios';
    import type { FinanceBillFileTaskWithdrawPOSTReq, FinanceBillFileTaskWithdrawPOSTRes } from './types';

    /**
     * 提现
     * @description /finance/bill_file_task/withdraw
     * @method POST
     */
    export async function withdraw(data: FinanceBillFileTaskWithdrawPOSTReq) {
      const response = await axios.post<FinanceBillFileTaskWithdrawPOSTRes>('/finance-service/finance/bill_file_task/withdraw', data);
      return response.data;
    }
    ");
}

#[test]
fn test_withdraw_diagnostics() {
    let artifacts = generate(WITHDRAW, GenerateOptions::default()).unwrap();

    assert_eq!(artifacts.warnings().count(), 0);
    let lossy: Vec<_> = artifacts
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Info)
        .filter_map(|d| d.location.as_deref())
        .collect();
    assert_eq!(
        lossy,
        ["FinanceBillFileTaskWithdrawPOSTResDataRecordsItem.amount"]
    );
}

const ORDER_DETAIL: &str = r#"{
    "errcode": 0,
    "errmsg": "成功！",
    "data": {
        "title": "订单详情",
        "path": "/order/v1/get-order-detail",
        "method": "GET",
        "req_body_type": "json",
        "req_body_other": "",
        "req_query": [
            { "name": "orderId", "required": "1", "desc": "订单ID" },
            { "name": "createTime", "required": "0" },
            { "name": "page", "required": "0", "example": "1" }
        ],
        "res_body_type": "json",
        "res_body": "{\"type\":\"object\",\"properties\":{\"items\":{\"type\":\"array\",\"items\":{\"type\":\"string\"}}}}"
    }
}"#;

#[test]
fn test_query_parameters_with_long_suffix() {
    let options = GenerateOptions {
        naming: NamingConfig {
            role_suffix: RoleSuffix::Long,
            ..NamingConfig::default()
        },
        ..GenerateOptions::default()
    };
    let artifacts = generate(ORDER_DETAIL, options).unwrap();

    insta::assert_snapshot!(artifacts.types, @r"
    /**
     * 订单详情
     * @path /order/v1/get-order-detail
     * @method GET
     */

    export interface OrderV1GetOrderDetailGETRequest {
      /** 订单ID */
      orderId: string | number;
      createTime?: string;
      page?: string;
    }

    export interface OrderV1GetOrderDetailGETResponse {
      items?: string[];
    }
    ");

    assert_eq!(artifacts.function_name, "getOrderDetail");
    assert!(artifacts.api.contains(
        "export async function getOrderDetail(params: OrderV1GetOrderDetailGETRequest) {"
    ));
    assert!(artifacts.api.contains(
        "axios.get<OrderV1GetOrderDetailGETResponse>('/order/v1/get-order-detail', { params });"
    ));
}

#[test]
fn test_malformed_body_degrades_to_empty_declaration() {
    let document = r#"{
        "errcode": 0,
        "errmsg": "",
        "data": {
            "title": "导出",
            "path": "/report/export",
            "method": "POST",
            "req_body_type": "json",
            "req_body_other": "{\"type\": \"object\", ",
            "res_body_type": "raw"
        }
    }"#;

    let artifacts = generate(document, GenerateOptions::default()).unwrap();

    assert!(artifacts.types.contains("export interface ReportExportPOSTReq {}"));
    assert!(artifacts.types.contains("export interface ReportExportPOSTRes {}"));
    assert!(
        artifacts
            .api
            .contains("export async function _export(data: ReportExportPOSTReq) {")
    );
    assert_eq!(artifacts.warnings().count(), 1);
}

const COLLIDING: &str = r#"{
    "errcode": 0,
    "errmsg": "",
    "data": {
        "title": "",
        "path": "/user/save",
        "method": "POST",
        "req_body_type": "json",
        "req_body_other": {
            "type": "object",
            "properties": {
                "profile": { "type": "object", "properties": { "name": { "type": "string" } } },
                "Profile": { "type": "object", "properties": { "nick": { "type": "string" } } }
            }
        }
    }
}"#;

#[test]
fn test_collision_suffix() {
    let artifacts = generate(COLLIDING, GenerateOptions::default()).unwrap();

    assert!(artifacts.types.contains("profile?: UserSavePOSTReqProfile;"));
    assert!(artifacts.types.contains("Profile?: UserSavePOSTReqProfile2;"));
}

#[test]
fn test_collision_reject() {
    let options = GenerateOptions {
        naming: NamingConfig {
            collisions: CollisionPolicy::Reject,
            ..NamingConfig::default()
        },
        ..GenerateOptions::default()
    };

    let err = generate(COLLIDING, options).unwrap_err();

    assert_eq!(
        err.to_string(),
        "name 'UserSavePOSTReqProfile' is already taken in this run"
    );
}

#[test]
fn test_upstream_error_surfaces_message() {
    let err = generate(
        r#"{"errcode": 40011, "errmsg": "请登录...", "data": null}"#,
        GenerateOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "请登录...");
}
