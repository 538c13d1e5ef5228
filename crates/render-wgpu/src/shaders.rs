/// WGSL shader for every shape: instanced meshes with Phong lighting.
pub const SHAPE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    global: mat4x4<f32>,
    eye: vec4<f32>,
    // enabled, point, directional, spot
    flags: vec4<u32>,
    // ambient, shininess, specular strength, outside-spot factor
    params: vec4<f32>,
    point_position: vec4<f32>,
    point_color: vec4<f32>,
    dir_direction: vec4<f32>,
    dir_color: vec4<f32>,
    spot: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;
@group(0) @binding(1)
var textures: texture_2d_array<f32>;
@group(0) @binding(2)
var texture_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) shade: f32,
};

struct InstanceInput {
    @location(4) model_0: vec4<f32>,
    @location(5) model_1: vec4<f32>,
    @location(6) model_2: vec4<f32>,
    @location(7) model_3: vec4<f32>,
    @location(8) normal_0: vec4<f32>,
    @location(9) normal_1: vec4<f32>,
    @location(10) normal_2: vec4<f32>,
    @location(11) color: vec4<f32>,
    // surface, layer, lit, specular
    @location(12) params: vec4<u32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) shade: f32,
    @location(4) color: vec4<f32>,
    @location(5) @interpolate(flat) params: vec4<u32>,
};

fn safe_normalize(v: vec3<f32>) -> vec3<f32> {
    let len = length(v);
    return select(vec3<f32>(0.0), v / len, len > 0.0);
}

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let normal_matrix = mat3x3<f32>(
        instance.normal_0.xyz,
        instance.normal_1.xyz,
        instance.normal_2.xyz,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * uniforms.global * world_pos;
    out.world_position = world_pos.xyz;
    out.world_normal = normal_matrix * vertex.normal;
    out.uv = vertex.uv;
    out.shade = vertex.shade;
    out.color = instance.color;
    out.params = instance.params;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let texel = textureSample(textures, texture_sampler, in.uv, in.params.y).rgb;
    let n = safe_normalize(in.world_normal);

    var base: vec3<f32>;
    switch in.params.x {
        case 0u: { base = in.color.rgb * in.shade; }
        case 1u: { base = vec3<f32>(in.uv, 1.0); }
        case 2u: { base = (n + vec3<f32>(1.0)) / 2.0; }
        default: { base = texel; }
    }

    if uniforms.flags.x == 0u || in.params.z == 0u {
        return vec4<f32>(base, in.color.a);
    }

    var rgb = base * uniforms.params.x;

    if uniforms.flags.z != 0u {
        let l = safe_normalize(-uniforms.dir_direction.xyz);
        let n_dot_l = max(dot(n, l), 0.0);
        rgb += uniforms.dir_color.rgb * base * n_dot_l * uniforms.dir_color.w;
    }

    if uniforms.flags.y != 0u {
        let l = safe_normalize(uniforms.point_position.xyz - in.world_position);
        let n_dot_l = max(dot(n, l), 0.0);
        rgb += uniforms.point_color.rgb * base * n_dot_l * uniforms.point_color.w;

        if in.params.w != 0u {
            let r = reflect(-l, n);
            let e = safe_normalize(uniforms.eye.xyz - in.world_position);
            let highlight = pow(max(dot(e, r), 0.0), uniforms.params.y) * uniforms.params.z;
            rgb += vec3<f32>(highlight);
        }

        if uniforms.flags.w != 0u {
            let cutoff = uniforms.spot.w;
            let intensity = dot(l, safe_normalize(uniforms.spot.xyz));
            if intensity > cutoff {
                rgb *= smoothstep(cutoff, 1.0, intensity);
            } else {
                rgb *= uniforms.params.w;
            }
        }
    }

    return vec4<f32>(rgb, in.color.a);
}
"#;

/// WGSL shader for the flat 2D overlay, already in clip space.
pub const OVERLAY_SHADER: &str = r#"
struct OverlayVertex {
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
};

struct OverlayOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_overlay(vertex: OverlayVertex) -> OverlayOutput {
    var out: OverlayOutput;
    out.clip_position = vec4<f32>(vertex.position, 0.0, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_overlay(in: OverlayOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
