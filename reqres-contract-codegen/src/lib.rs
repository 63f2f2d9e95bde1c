use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use quote::quote_spanned;
use syn::spanned::Spanned;

/// Turns `fn name(client: &ReqresClient)` into a `#[test]` whose client comes from a configuration
/// function.
///
/// ```ignore
/// fn configure(config: &mut ContractConfiguration) {
///     config.add_request_mutations(|m| m.add_header("x-api-key", "reqres-free-v1"));
/// }
///
/// #[contract_test(configure)]
/// fn register_user(client: &ReqresClient) -> CaseResult {
///     cases::register_user(client)
/// }
/// ```
#[proc_macro_attribute]
pub fn contract_test(attrs: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    let args = syn::parse_macro_input!(attrs as syn::AttributeArgs);

    if args.len() != 1 {
        return compile_error(
            Span::call_site(),
            "A configuration function should be passed to the macro",
        )
        .into();
    }

    let configuration_function;
    if let syn::NestedMeta::Meta(syn::Meta::Path(function_path)) = &args[0] {
        configuration_function = function_path;
    } else {
        return compile_error(args[0].span(), "The argument should be a configuration function!")
            .into();
    }

    let signature = &input.sig;
    let takes_one_typed_argument = signature.inputs.len() == 1
        && matches!(signature.inputs.first(), Some(syn::FnArg::Typed(_)));

    if !takes_one_typed_argument {
        return compile_error(
            signature.inputs.span(),
            "The test function should take exactly one argument: the client",
        )
        .into();
    }

    let attributes = &input.attrs;
    let visibility = &input.vis;
    let name = &signature.ident;
    let arguments = &signature.inputs;
    let return_type = &signature.output;
    let block = &input.block;

    let output = quote! {
        #[test]
        #(#attributes)*
        #visibility fn #name() #return_type {
            fn __contract_test_body(#arguments) #return_type #block

            ::reqres_contract::init_test_logging();
            let mut __contract_configuration = ::reqres_contract::ContractConfiguration::new();
            #configuration_function(&mut __contract_configuration);
            let __contract_session = ::reqres_contract::TestSession::enter();
            let __contract_client =
                ::reqres_contract::ReqresClient::from_configuration(__contract_configuration);

            __contract_test_body(&__contract_client)
        }
    };

    TokenStream::from(output)
}

fn compile_error(span: Span, message: &str) -> proc_macro2::TokenStream {
    quote_spanned! {span=>
        compile_error!(#message);
    }
}
